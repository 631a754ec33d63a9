use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::config::ContactConfig;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    #[schema(example = "+249928570921")]
    pub owner_phone: String,
    #[schema(example = "249928570921")]
    pub owner_whatsapp: String,
    #[schema(example = "https://wa.me/249928570921")]
    pub whatsapp_url: String,
}

impl From<&ContactConfig> for ContactResponseDto {
    fn from(c: &ContactConfig) -> Self {
        let digits: String = c
            .owner_whatsapp
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        Self {
            owner_phone: c.owner_phone.clone(),
            owner_whatsapp: c.owner_whatsapp.clone(),
            whatsapp_url: format!("https://wa.me/{}", digits),
        }
    }
}
