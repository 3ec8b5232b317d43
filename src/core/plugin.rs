use crate::core::options::{check_radius, load_or_init, validate_options};
use crate::core::render::{render_venue_list, venue_links};
use crate::core::shortcode::ShortcodeAttributes;
use crate::core::{
    GeoLocation, MeetOptions, MeetQuery, OptionsInput, OptionsStore, VenueLink, VenueSource,
};
use crate::utils::error::Result;

/// 把設定紀錄、地點來源與渲染串起來，對應主機的 shortcode 呼叫
pub struct MeetsPlugin<S: OptionsStore, V: VenueSource> {
    store: S,
    source: V,
    options: MeetOptions,
}

impl<S: OptionsStore, V: VenueSource> MeetsPlugin<S, V> {
    pub async fn new(store: S, source: V) -> Result<Self> {
        let options = load_or_init(&store).await?;
        tracing::debug!(
            "Loaded options: radius={} limit={}",
            options.radius,
            options.limit
        );
        Ok(Self {
            store,
            source,
            options,
        })
    }

    pub fn options(&self) -> MeetOptions {
        self.options
    }

    /// 設定頁送出：驗證後儲存
    pub async fn update_options(&mut self, input: OptionsInput) -> Result<MeetOptions> {
        check_radius("radius", input.radius)?;
        let options = validate_options(input);
        self.store.save(&options).await?;
        self.options = options;
        tracing::info!(
            "Options updated: radius={} limit={}",
            options.radius,
            options.limit
        );
        Ok(options)
    }

    pub async fn find_meets(
        &self,
        attributes: &ShortcodeAttributes,
        location: GeoLocation,
    ) -> Result<Vec<VenueLink>> {
        let resolved = attributes.resolve(&self.options);
        let query = MeetQuery::new(location, resolved.radius, resolved.limit);

        let venues = self.source.find_nearby_venues(&query).await?;
        tracing::info!(
            "Found {} venues near ({}, {})",
            venues.len(),
            location.latitude,
            location.longitude
        );
        Ok(venue_links(&venues))
    }

    /// 查詢失敗時記錄警告並輸出空清單
    pub async fn render_shortcode(
        &self,
        attributes: &ShortcodeAttributes,
        location: GeoLocation,
    ) -> String {
        match self.find_meets(attributes, location).await {
            Ok(links) => render_venue_list(&links),
            Err(e) => {
                tracing::warn!(
                    "Venue lookup failed, rendering empty list: {} ({})",
                    e,
                    e.recovery_suggestion()
                );
                render_venue_list(&[])
            }
        }
    }
}
