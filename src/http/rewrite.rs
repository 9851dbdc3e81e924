//! Path-normalizing middleware.
//!
//! Rewrites each request's path to its canonical form before the inner
//! service sees it, so routes only ever need to be declared canonically.
//! The pre-normalization path stays available to downstream handlers via
//! the [`OriginalPath`] request extension.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::uri::PathAndQuery;
use axum::http::{Request, Uri};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tower::{Layer, Service};

use crate::aliases::source::StaticSource;
use crate::aliases::table::AliasTable;
use crate::resolver::dynamic::DynamicPathResolver;

/// Characters that must stay percent-encoded inside a path. `%` is
/// included so a re-encoded path decodes back to the same spelling.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%');

/// The request path as received, percent-decoded, before normalization.
#[derive(Debug, Clone)]
pub struct OriginalPath(pub String);

/// Layer that normalizes request paths through an alias table.
#[derive(Clone)]
pub struct NormalizeLayer {
    resolver: Arc<DynamicPathResolver>,
}

impl NormalizeLayer {
    pub fn new(resolver: DynamicPathResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Convenience constructor for a fixed table.
    pub fn with_table(table: AliasTable) -> Self {
        Self::new(DynamicPathResolver::new(StaticSource::new(table)))
    }
}

impl<S> Layer<S> for NormalizeLayer {
    type Service = NormalizeService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NormalizeService {
            inner,
            resolver: self.resolver.clone(),
        }
    }
}

/// Service produced by [`NormalizeLayer`].
#[derive(Clone)]
pub struct NormalizeService<S> {
    inner: S,
    resolver: Arc<DynamicPathResolver>,
}

impl<S, B> Service<Request<B>> for NormalizeService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        // The URI path is percent-encoded on the wire; the alias table
        // holds decoded UTF-8 spellings. Match on the decoded form.
        let raw = req.uri().path().to_string();
        let path = match percent_decode_str(&raw).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                tracing::warn!(
                    path = %raw,
                    error = %e,
                    "request path is not valid UTF-8 once decoded; matching it verbatim"
                );
                raw.clone()
            }
        };

        match self.resolver.normalize(&path) {
            Ok(normalized) => {
                if normalized != path {
                    let encoded = utf8_percent_encode(&normalized, PATH).to_string();
                    match replace_path(req.uri(), &encoded) {
                        Some(uri) => {
                            tracing::debug!(
                                original = %path,
                                normalized = %normalized,
                                "rewrote request path"
                            );
                            *req.uri_mut() = uri;
                        }
                        None => {
                            tracing::warn!(
                                original = %path,
                                normalized = %normalized,
                                "normalized path is not a valid URI; request left untouched"
                            );
                        }
                    }
                }
                req.extensions_mut().insert(OriginalPath(path));
            }
            Err(e) => {
                // Freshness failures must not break routing; the original
                // path is still recorded so the downstream contract holds.
                tracing::error!(
                    error = %e,
                    path = %path,
                    "alias table fetch failed; passing request through unrewritten"
                );
                req.extensions_mut().insert(OriginalPath(path));
            }
        }

        self.inner.call(req)
    }
}

/// Rebuild `uri` with `new_path`, keeping the query string.
fn replace_path(uri: &Uri, new_path: &str) -> Option<Uri> {
    let mut parts = uri.clone().into_parts();

    let path_and_query = match uri.query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query.as_str()).ok()?);

    Uri::from_parts(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_path_keeps_the_query() {
        let uri: Uri = "http://example.com/articulos?page=2".parse().unwrap();
        let rewritten = replace_path(&uri, "/articles").unwrap();

        assert_eq!(rewritten.path(), "/articles");
        assert_eq!(rewritten.query(), Some("page=2"));
        assert_eq!(rewritten.host(), Some("example.com"));
    }

    #[test]
    fn encoding_round_trips_non_ascii_paths() {
        let encoded = utf8_percent_encode("/artículos/el bloque", PATH).to_string();
        assert_eq!(encoded, "/art%C3%ADculos/el%20bloque");
        assert_eq!(
            percent_decode_str(&encoded).decode_utf8().unwrap(),
            "/artículos/el bloque"
        );
    }

    #[test]
    fn encoding_escapes_literal_percent_signs() {
        let encoded = utf8_percent_encode("/100%", PATH).to_string();
        assert_eq!(encoded, "/100%25");
    }

    #[test]
    fn replace_path_without_query() {
        let uri: Uri = "/articulos/le-bloc/".parse().unwrap();
        let rewritten = replace_path(&uri, "/articles/the-block/").unwrap();

        assert_eq!(rewritten.path(), "/articles/the-block/");
        assert_eq!(rewritten.query(), None);
    }
}
