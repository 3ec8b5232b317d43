use crate::core::{MeetOptions, OptionsInput, OptionsStore};
use crate::utils::error::{MeetsError, Result};
use crate::utils::validation::{coerce_count, coerce_non_negative};

/// 設定頁的驗證：負數一律改成 0
pub fn validate_options(input: OptionsInput) -> MeetOptions {
    MeetOptions {
        radius: coerce_non_negative(input.radius),
        limit: coerce_count(input.limit),
    }
}

/// 正無限大無法轉成查詢參數；NaN 與負數交給 `validate_options` 改成 0
pub fn check_radius(field_name: &str, radius: f64) -> Result<()> {
    if radius.is_infinite() && radius.is_sign_positive() {
        return Err(MeetsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: radius.to_string(),
            reason: "Radius must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// 讀取已儲存的設定；沒有或缺欄位時補上預設值並寫回
pub async fn load_or_init<S: OptionsStore>(store: &S) -> Result<MeetOptions> {
    let defaults = MeetOptions::default();

    let Some(stored) = store.load().await? else {
        tracing::info!("No stored options found, saving defaults");
        store.save(&defaults).await?;
        return Ok(defaults);
    };

    let radius = stored.radius.unwrap_or(defaults.radius);
    check_radius("options.radius", radius)?;

    let options = validate_options(OptionsInput {
        radius,
        limit: stored.limit.unwrap_or(defaults.limit as i64),
    });

    if stored.radius.is_none() || stored.limit.is_none() {
        tracing::info!("Stored options incomplete, filling in defaults");
        store.save(&options).await?;
    }

    Ok(options)
}
