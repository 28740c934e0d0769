use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "actor_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Admin,
    User,
    System,
    Guest,
}

/// Explicit identity passed into every core operation, replacing any
/// ambient session lookup. The ip is captured for the activity trail
/// when the calling context has one.
#[derive(Debug, Clone)]
pub struct Actor {
    pub kind: ActorType,
    pub id: Option<Uuid>,
    pub ip: Option<String>,
}

impl Actor {
    pub fn admin(id: Uuid) -> Actor {
        Actor {
            kind: ActorType::Admin,
            id: Some(id),
            ip: None,
        }
    }

    pub fn user(id: Uuid) -> Actor {
        Actor {
            kind: ActorType::User,
            id: Some(id),
            ip: None,
        }
    }

    pub fn system() -> Actor {
        Actor {
            kind: ActorType::System,
            id: None,
            ip: None,
        }
    }

    pub fn guest() -> Actor {
        Actor {
            kind: ActorType::Guest,
            id: None,
            ip: None,
        }
    }

    pub fn with_ip(mut self, ip: Option<String>) -> Actor {
        self.ip = ip;
        self
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ActivityLog {
    pub id: Uuid,
    pub action: String,
    pub description: String,
    pub actor_type: ActorType,
    pub actor_id: Option<Uuid>,
    pub ip_address: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
