//! Static country metadata
//!
//! The supported country set is fixed at compile time. The ISO3 code is the
//! canonical entity key for baseline rows and the happiness dataset; the
//! display name is the join key for the inflation and corruption datasets.

/// A supported country: canonical ISO3 code plus display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Three-letter ISO 3166-1 alpha-3 code
    pub iso3: &'static str,
    /// English display name
    pub name: &'static str,
}

/// All countries covered by the baseline generator, in output order
pub const COUNTRIES: &[Country] = &[
    Country { iso3: "USA", name: "United States" },
    Country { iso3: "CAN", name: "Canada" },
    Country { iso3: "MEX", name: "Mexico" },
    Country { iso3: "BRA", name: "Brazil" },
    Country { iso3: "ARG", name: "Argentina" },
    Country { iso3: "CHL", name: "Chile" },
    Country { iso3: "COL", name: "Colombia" },
    Country { iso3: "PER", name: "Peru" },
    Country { iso3: "GBR", name: "United Kingdom" },
    Country { iso3: "IRL", name: "Ireland" },
    Country { iso3: "FRA", name: "France" },
    Country { iso3: "DEU", name: "Germany" },
    Country { iso3: "ITA", name: "Italy" },
    Country { iso3: "ESP", name: "Spain" },
    Country { iso3: "PRT", name: "Portugal" },
    Country { iso3: "NLD", name: "Netherlands" },
    Country { iso3: "BEL", name: "Belgium" },
    Country { iso3: "CHE", name: "Switzerland" },
    Country { iso3: "AUT", name: "Austria" },
    Country { iso3: "SWE", name: "Sweden" },
    Country { iso3: "NOR", name: "Norway" },
    Country { iso3: "DNK", name: "Denmark" },
    Country { iso3: "FIN", name: "Finland" },
    Country { iso3: "ISL", name: "Iceland" },
    Country { iso3: "POL", name: "Poland" },
    Country { iso3: "CZE", name: "Czechia" },
    Country { iso3: "SVK", name: "Slovakia" },
    Country { iso3: "HUN", name: "Hungary" },
    Country { iso3: "ROU", name: "Romania" },
    Country { iso3: "BGR", name: "Bulgaria" },
    Country { iso3: "GRC", name: "Greece" },
    Country { iso3: "HRV", name: "Croatia" },
    Country { iso3: "SVN", name: "Slovenia" },
    Country { iso3: "EST", name: "Estonia" },
    Country { iso3: "LVA", name: "Latvia" },
    Country { iso3: "LTU", name: "Lithuania" },
    Country { iso3: "UKR", name: "Ukraine" },
    Country { iso3: "TUR", name: "Turkey" },
    Country { iso3: "CHN", name: "China" },
    Country { iso3: "JPN", name: "Japan" },
    Country { iso3: "KOR", name: "South Korea" },
    Country { iso3: "IND", name: "India" },
    Country { iso3: "IDN", name: "Indonesia" },
    Country { iso3: "THA", name: "Thailand" },
    Country { iso3: "VNM", name: "Vietnam" },
    Country { iso3: "PHL", name: "Philippines" },
    Country { iso3: "MYS", name: "Malaysia" },
    Country { iso3: "SGP", name: "Singapore" },
    Country { iso3: "AUS", name: "Australia" },
    Country { iso3: "NZL", name: "New Zealand" },
    Country { iso3: "ZAF", name: "South Africa" },
    Country { iso3: "EGY", name: "Egypt" },
    Country { iso3: "NGA", name: "Nigeria" },
    Country { iso3: "KEN", name: "Kenya" },
    Country { iso3: "MAR", name: "Morocco" },
    Country { iso3: "ISR", name: "Israel" },
    Country { iso3: "SAU", name: "Saudi Arabia" },
    Country { iso3: "ARE", name: "United Arab Emirates" },
    Country { iso3: "QAT", name: "Qatar" },
];

/// Look up a country by its ISO3 code
#[must_use] pub fn country_by_iso3(iso3: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.iso3 == iso3)
}
