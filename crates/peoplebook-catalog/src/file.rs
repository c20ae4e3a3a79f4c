use crate::parse::parse_country_list;
use crate::source::CountrySource;
use crate::Result;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CountrySource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_countries(&self) -> Result<Vec<String>> {
        let body = fs::read_to_string(&self.path)?;
        parse_country_list(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::FileSource;
    use crate::source::CountrySource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_json_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("countries.json");
        fs::write(&path, r#"[{"name": {"common": "Nepal"}}]"#).expect("write");
        let names = FileSource::new(path).fetch_countries().expect("fetch");
        assert_eq!(names, vec!["Nepal"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().expect("tempdir");
        let source = FileSource::new(temp.path().join("missing.txt"));
        assert!(source.fetch_countries().is_err());
    }
}
