//! Submitting a regex: validate, convert, record, persist.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::client::{ConversionService, ConvertError};
use crate::history::HistoryCache;
use crate::record::{ConversionRecord, RecordIdFormat};
use crate::storage::BlobStore;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Empty or whitespace-only input; the service is never called.
    #[error("Please enter a regular expression.")]
    EmptyInput,
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("could not save history: {0:#}")]
    Storage(anyhow::Error),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Convert(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Converts `input` and prepends the resulting record to the history.
///
/// The input is trimmed before validation and before it is sent. The
/// returned record is already normalized; callers navigate to its id.
pub fn submit<C, S>(
    input: &str,
    service: &C,
    history: &HistoryCache<S>,
    ids: RecordIdFormat,
    now: DateTime<Utc>,
) -> Result<ConversionRecord, SubmitError>
where
    C: ConversionService + ?Sized,
    S: BlobStore,
{
    let regex = input.trim();
    if regex.is_empty() {
        return Err(SubmitError::EmptyInput);
    }

    let payload = service.convert(regex)?;
    let record = ConversionRecord::new(ids.generate(now), regex.to_string(), now, payload)
        .normalize(history.resolver());

    history
        .prepend(record.clone())
        .map_err(SubmitError::Storage)?;
    tracing::info!("converted {:?} as record {}", record.regex, record.id);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ConversionPayload, Resources};
    use crate::resource::Resolver;
    use crate::storage::MemoryBlobStore;
    use std::cell::RefCell;

    /// Records calls and replies with a fixed result.
    struct StubService {
        calls: RefCell<Vec<String>>,
        reply: fn() -> Result<ConversionPayload, ConvertError>,
    }

    impl StubService {
        fn new(reply: fn() -> Result<ConversionPayload, ConvertError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl ConversionService for StubService {
        fn convert(&self, regex: &str) -> Result<ConversionPayload, ConvertError> {
            self.calls.borrow_mut().push(regex.to_string());
            (self.reply)()
        }
    }

    fn ok_payload() -> Result<ConversionPayload, ConvertError> {
        Ok(Resources {
            nfa_img: Some("/static/output/s_nfa.png".into()),
            dfa_json: Some(r"C:\app\static\output\s_dfa.json".into()),
            ..Resources::default()
        })
    }

    fn failing() -> Result<ConversionPayload, ConvertError> {
        Err(ConvertError::Service {
            status: 500,
            message: Some("Unexpected token ')'".into()),
        })
    }

    fn history() -> HistoryCache<MemoryBlobStore> {
        HistoryCache::new(MemoryBlobStore::new(), Resolver::new("http://localhost:8000"))
    }

    fn now() -> DateTime<Utc> {
        "2024-03-01T09:15:00.000Z".parse().unwrap()
    }

    #[test]
    fn empty_input_skips_service() {
        let svc = StubService::new(ok_payload);
        let h = history();
        for input in ["", "   ", "\t\n"] {
            let err = submit(input, &svc, &h, RecordIdFormat::Uuid, now()).unwrap_err();
            assert!(matches!(err, SubmitError::EmptyInput));
            assert_eq!(err.user_message(), "Please enter a regular expression.");
        }
        assert!(svc.calls.borrow().is_empty());
        assert!(h.load().is_empty());
    }

    #[test]
    fn success_trims_normalizes_and_prepends() {
        let svc = StubService::new(ok_payload);
        let h = history();
        let rec = submit("  (a|b)*c  ", &svc, &h, RecordIdFormat::Uuid, now()).unwrap();
        assert_eq!(svc.calls.borrow().as_slice(), ["(a|b)*c"]);
        assert_eq!(rec.regex, "(a|b)*c");
        assert_eq!(rec.date, now());
        assert_eq!(
            rec.resources.nfa_img.as_deref(),
            Some("http://localhost:8000/static/output/s_nfa.png.png")
        );
        assert_eq!(
            rec.resources.dfa_json.as_deref(),
            Some("http://localhost:8000/static/output/s_dfa.json")
        );
        assert_eq!(h.load(), vec![rec.clone()]);

        let second = submit("a+b*", &svc, &h, RecordIdFormat::Timestamp, now()).unwrap();
        assert_ne!(second.id, rec.id);
        let ids: Vec<String> = h.load().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, [second.id, rec.id]);
    }

    #[test]
    fn service_failure_surfaces_message_and_saves_nothing() {
        let svc = StubService::new(failing);
        let h = history();
        let err = submit("a)", &svc, &h, RecordIdFormat::Uuid, now()).unwrap_err();
        assert_eq!(err.user_message(), "Unexpected token ')'");
        assert_eq!(svc.calls.borrow().len(), 1);
        assert!(h.load().is_empty());
    }
}
