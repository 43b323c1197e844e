use crate::dtos::PushTokenDTO;
use examtrack_domain::PushToken;
use serde::{Deserialize, Serialize};

pub mod register_push_token {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub token: String,
        pub platform: Option<String>,
        pub user_agent: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub token: PushTokenDTO,
    }

    impl APIResponse {
        pub fn new(push_token: PushToken) -> Self {
            Self {
                token: PushTokenDTO::new(push_token),
            }
        }
    }
}

pub mod send_due_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub schedules_found: usize,
        pub tokens_found: usize,
        pub successes: usize,
        pub failures: usize,
    }

    impl APIResponse {
        pub fn new(
            schedules_found: usize,
            tokens_found: usize,
            successes: usize,
            failures: usize,
        ) -> Self {
            Self {
                schedules_found,
                tokens_found,
                successes,
                failures,
            }
        }
    }
}

pub mod send_test_notification {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct APIResponse {
        pub id: i64,
    }

    impl APIResponse {
        pub fn new(id: i64) -> Self {
            Self { id }
        }
    }
}
