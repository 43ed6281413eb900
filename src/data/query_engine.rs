use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::data::company_record::CompanyRecord;
use crate::data::store::CompanyStore;

/// Read-only queries over the company dataset.
///
/// The engine holds the store rather than a dataset so that the first
/// query can trigger the lazy load; everything after that is a lock-free
/// linear scan in load order. Misses are `None`, never errors — only a
/// failed dataset load surfaces as `Err`.
pub struct QueryEngine {
    store: Arc<CompanyStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<CompanyStore>) -> Self {
        Self { store }
    }

    /// Find the first record whose ticker equals the query text or whose
    /// name contains it, both case-insensitively.
    ///
    /// First match in load order wins, so a ticker hit on a later row
    /// loses to a name hit on an earlier one.
    pub fn find_by_ticker_or_name(&self, query: &str) -> Result<Option<CompanyRecord>> {
        let dataset = self.store.dataset()?;
        let needle = query.to_uppercase();

        let hit = dataset
            .iter()
            .find(|record| {
                let ticker_match = record
                    .ticker
                    .as_deref()
                    .is_some_and(|ticker| ticker.to_uppercase() == needle);
                let name_match = record
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_uppercase().contains(&needle));
                ticker_match || name_match
            })
            .cloned();

        debug!(
            "Text query '{}' -> {}",
            query,
            hit.as_ref().map_or_else(|| "miss".to_string(), |r| format!("id {}", r.id))
        );
        Ok(hit)
    }

    /// Find the record with exactly this id.
    pub fn find_by_id(&self, id: i64) -> Result<Option<CompanyRecord>> {
        let dataset = self.store.dataset()?;
        Ok(dataset.iter().find(|record| record.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Row order matters: two names contain "tech", id 30 comes first.
    const ROWS: &str = "\
10,1,Acme Corp,Retail,Springfield,IL,62701,acme.com,\"1,200\",$500,$600,$50,,aapl,Jane Doe
30,2,Initech Technologies,Software,Austin,TX,73301,initech.com,450,$320,$410,$12,,INI,Bill L
40,3,Futuretech Group,Software,Reno,NV,89501,futuretech.io,220,$90,$130,$4,,FTG,Pat Q
50,4,Globex,Energy,Houston,TX,77001,globex.com,\"8,000\",\"$1,250.5\",$900,$75,,,Hank S
";

    fn engine() -> (NamedTempFile, QueryEngine) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(ROWS.as_bytes()).unwrap();
        let store = Arc::new(CompanyStore::new(file.path()));
        (file, QueryEngine::new(store))
    }

    #[test]
    fn ticker_matches_case_insensitively() {
        let (_file, engine) = engine();
        // Stored ticker is lowercase "aapl"; the name has no "AAPL" in it
        let record = engine.find_by_ticker_or_name("AAPL").unwrap().unwrap();
        assert_eq!(record.id, 10);
    }

    #[test]
    fn name_substring_matches_first_in_load_order() {
        let (_file, engine) = engine();
        let record = engine.find_by_ticker_or_name("tech").unwrap().unwrap();
        assert_eq!(record.id, 30);
    }

    #[test]
    fn records_without_ticker_still_match_by_name() {
        let (_file, engine) = engine();
        let record = engine.find_by_ticker_or_name("globex").unwrap().unwrap();
        assert_eq!(record.id, 50);
    }

    #[test]
    fn text_miss_is_none_not_error() {
        let (_file, engine) = engine();
        assert_eq!(engine.find_by_ticker_or_name("zzz").unwrap(), None);
    }

    #[test]
    fn find_by_id_returns_the_exact_record() {
        let (_file, engine) = engine();
        let record = engine.find_by_id(40).unwrap().unwrap();
        assert_eq!(record.name.as_deref(), Some("Futuretech Group"));
        assert_eq!(engine.find_by_id(41).unwrap(), None);
    }

    #[test]
    fn load_failure_surfaces_as_error() {
        let store = Arc::new(CompanyStore::new("/no/such/file.csv"));
        let engine = QueryEngine::new(store);
        assert!(engine.find_by_ticker_or_name("anything").is_err());
        assert!(engine.find_by_id(1).is_err());
    }
}
