use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct Create {
    #[validate(min_length = 1)]
    pub client_name: String,
}

impl Into<models::StatusCheck> for Create {
    fn into(self) -> models::StatusCheck {
        models::StatusCheck {
            id: Uuid::new_v4(),
            client_name: self.client_name,
            timestamp: Utc::now(),
        }
    }
}
