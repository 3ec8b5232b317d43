use crate::domain::model::{MeetOptions, MeetQuery, Venue};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 已儲存的設定紀錄，舊版本可能缺少部分欄位
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl From<MeetOptions> for StoredOptions {
    fn from(options: MeetOptions) -> Self {
        Self {
            radius: Some(options.radius),
            limit: Some(options.limit as i64),
        }
    }
}

pub trait OptionsStore: Send + Sync {
    /// 尚未儲存過任何設定時回傳 `None`
    fn load(&self) -> impl std::future::Future<Output = Result<Option<StoredOptions>>> + Send;
    fn save(&self, options: &MeetOptions) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait VenueSource: Send + Sync {
    async fn find_nearby_venues(&self, query: &MeetQuery) -> Result<Vec<Venue>>;
}
