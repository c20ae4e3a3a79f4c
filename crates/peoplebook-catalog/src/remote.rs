#[cfg(feature = "remote-catalog")]
mod imp {
    use crate::parse::parse_country_json;
    use crate::source::CountrySource;
    use crate::{CatalogError, Result};
    use reqwest::blocking::Client;
    use std::time::Duration;
    use url::Url;

    #[derive(Debug, Clone)]
    pub struct RestCountriesSource {
        url: String,
    }

    impl RestCountriesSource {
        pub fn new(url: String) -> Self {
            Self { url }
        }
    }

    impl CountrySource for RestCountriesSource {
        fn source_name(&self) -> &'static str {
            "remote"
        }

        fn fetch_countries(&self) -> Result<Vec<String>> {
            fetch_country_names(&self.url)
        }
    }

    pub fn fetch_country_names(catalog_url: &str) -> Result<Vec<String>> {
        let url = Url::parse(catalog_url)?;
        if url.scheme() != "https" {
            return Err(CatalogError::Parse(
                "country catalog url must use https".to_string(),
            ));
        }
        let client = Client::builder()
            .user_agent("peoplebook")
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        let body = client
            .get(url)
            .header("Accept", "application/json")
            .send()?
            .error_for_status()?
            .text()?;
        parse_country_json(&body)
    }
}

#[cfg(not(feature = "remote-catalog"))]
mod imp {
    use crate::source::CountrySource;
    use crate::{CatalogError, Result};

    #[derive(Debug, Clone)]
    pub struct RestCountriesSource {
        url: String,
    }

    impl RestCountriesSource {
        pub fn new(url: String) -> Self {
            Self { url }
        }
    }

    impl CountrySource for RestCountriesSource {
        fn source_name(&self) -> &'static str {
            "remote"
        }

        fn fetch_countries(&self) -> Result<Vec<String>> {
            fetch_country_names(&self.url)
        }
    }

    pub fn fetch_country_names(_catalog_url: &str) -> Result<Vec<String>> {
        Err(CatalogError::Unavailable(
            "remote country catalog requires the remote-catalog feature".to_string(),
        ))
    }
}

pub use imp::{fetch_country_names, RestCountriesSource};
