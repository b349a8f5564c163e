use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub status: ComponentStatus,
    pub message: Option<String>,
    pub response_time_ms: Option<u64>,
    pub last_checked: DateTime<Utc>,
}

impl ComponentHealth {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            message: None,
            response_time_ms: Some(response_time_ms),
            last_checked: Utc::now(),
        }
    }

    pub fn degraded(message: String, response_time_ms: u64) -> Self {
        Self {
            status: ComponentStatus::Degraded,
            message: Some(message),
            response_time_ms: Some(response_time_ms),
            last_checked: Utc::now(),
        }
    }

    pub fn unhealthy(error: String) -> Self {
        Self {
            status: ComponentStatus::Unhealthy,
            message: Some(error),
            response_time_ms: None,
            last_checked: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: ComponentStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    pub fn new(version: String, uptime_seconds: u64) -> Self {
        Self {
            status: ComponentStatus::Healthy,
            version,
            uptime_seconds,
            components: HashMap::new(),
        }
    }

    /// Overall status is the worst status among registered components.
    pub fn add_component(&mut self, name: String, health: ComponentHealth) {
        match health.status {
            ComponentStatus::Unhealthy => self.status = ComponentStatus::Unhealthy,
            ComponentStatus::Degraded if self.status == ComponentStatus::Healthy => {
                self.status = ComponentStatus::Degraded
            }
            _ => {}
        }
        self.components.insert(name, health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_component_degrades_overall_status() {
        let mut response = HealthCheckResponse::new("0.1.0".to_string(), 0);
        response.add_component("database".to_string(), ComponentHealth::healthy(2));
        assert_eq!(response.status, ComponentStatus::Healthy);

        response.add_component(
            "database".to_string(),
            ComponentHealth::unhealthy("connection refused".to_string()),
        );
        assert_eq!(response.status, ComponentStatus::Unhealthy);
    }

    #[test]
    fn degraded_does_not_override_unhealthy() {
        let mut response = HealthCheckResponse::new("0.1.0".to_string(), 0);
        response.add_component(
            "database".to_string(),
            ComponentHealth::unhealthy("timeout".to_string()),
        );
        response.add_component(
            "other".to_string(),
            ComponentHealth::degraded("slow".to_string(), 1500),
        );
        assert_eq!(response.status, ComponentStatus::Unhealthy);
    }
}
