mod exam;
mod notification;
mod settings;
mod status;

pub mod dtos {
    pub use crate::exam::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::settings::dtos::*;
}

pub use crate::exam::api::*;
pub use crate::notification::api::*;
pub use crate::settings::api::*;
pub use crate::status::api::*;
