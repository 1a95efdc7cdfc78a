/// Optional filters for the tariff listing endpoint.
///
/// Every field is optional; `None` (or an empty string) means the parameter
/// is omitted from the request entirely, leaving the server-side default in
/// effect. All values are passed through verbatim, including `count` and
/// `page`, which Onlinesim accepts as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffsQuery {
    /// Currency locale for returned prices (`locale_price`).
    pub locale_price: Option<String>,
    /// Preselected country id (`country`).
    pub country: Option<String>,
    /// Country name filter (`filter_country`).
    pub filter_country: Option<String>,
    /// Service name filter (`filter_service`).
    pub filter_service: Option<String>,
    /// Maximum number of results per page (`count`).
    pub count: Option<String>,
    /// Result page (`page`).
    pub page: Option<String>,
    /// Response language (`lang`).
    pub lang: Option<String>,
}

impl TariffsQuery {
    /// Query with no filters set; the server returns its default listing.
    pub fn new() -> Self {
        Self::default()
    }
}
