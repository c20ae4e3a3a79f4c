use crate::commands::print_json;
use anyhow::Result;
use peoplebook_catalog::{
    country_options, BuiltinSource, CountrySource, FileSource, RestCountriesSource,
};
use peoplebook_config::{AppConfig, CountriesConfig};

pub fn list_countries(config: &AppConfig, json: bool) -> Result<()> {
    let source = country_source(&config.countries);
    let options = country_options(&config.default_country, source.as_ref());
    if json {
        return print_json(&options);
    }
    for name in options {
        println!("{}", name);
    }
    Ok(())
}

fn country_source(config: &CountriesConfig) -> Box<dyn CountrySource> {
    match config {
        CountriesConfig::Builtin => Box::new(BuiltinSource),
        CountriesConfig::File { path } => Box::new(FileSource::new(path.clone())),
        CountriesConfig::Remote { url } => Box::new(RestCountriesSource::new(url.clone())),
    }
}
