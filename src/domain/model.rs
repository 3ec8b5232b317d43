use serde::Serialize;

/// 單一聚會地點，建立後不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    id: String,
    name: String,
    url: String,
}

impl Venue {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 地點詳細頁面：`<base>/Home/Venue/<id>`
pub fn venue_url(base_url: &str, id: &str) -> String {
    format!("{}/Home/Venue/{}", base_url, id)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeetQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub limit: u32,
}

impl MeetQuery {
    pub fn new(location: GeoLocation, radius: f64, limit: u32) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            radius,
            limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// 給呈現層使用的結構化輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueLink {
    pub name: String,
    pub url: String,
}

impl From<&Venue> for VenueLink {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name().to_string(),
            url: venue.url().to_string(),
        }
    }
}

pub const DEFAULT_RADIUS: f64 = 35.0;
pub const DEFAULT_LIMIT: u32 = 5;

/// 持久化的外掛設定
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeetOptions {
    pub radius: f64,
    pub limit: u32,
}

impl Default for MeetOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// 設定頁送出的原始值，可能為負數
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionsInput {
    pub radius: f64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_accessors() {
        let venue = Venue::new("12", "The Ace Cafe", "http://bikermeets.cc/Home/Venue/12");
        assert_eq!(venue.id(), "12");
        assert_eq!(venue.name(), "The Ace Cafe");
        assert_eq!(venue.url(), "http://bikermeets.cc/Home/Venue/12");
    }

    #[test]
    fn test_venue_url() {
        assert_eq!(
            venue_url("http://bikermeets.cc", "12"),
            "http://bikermeets.cc/Home/Venue/12"
        );
        assert_eq!(
            venue_url("https://meets.example.org", "abc-7"),
            "https://meets.example.org/Home/Venue/abc-7"
        );
    }

    #[test]
    fn test_default_options() {
        let options = MeetOptions::default();
        assert_eq!(options.radius, 35.0);
        assert_eq!(options.limit, 5);
    }
}
