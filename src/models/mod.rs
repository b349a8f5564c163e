mod status_check;

pub use status_check::StatusCheck;
