//! Request-target classification.

use std::fs::Metadata;

use crate::config::ContentConfig;

/// How a resolved resource is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Body is the verbatim byte content of the file at `path`.
    Static,
    /// Body is produced by executing the program at `path`.
    Dynamic,
}

/// The (kind, path, args) triple derived from a request target.
///
/// Built once per request and consumed by exactly one responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: ResourceKind,
    /// Filesystem path, the content root textually prepended to the
    /// target. Not canonicalized and not percent-decoded; `..` segments
    /// pass through untouched. Deploying this server against untrusted
    /// clients requires traversal validation on top.
    pub path: String,
    /// Query portion of the target, empty for static resources and for
    /// dynamic targets without a `?`.
    pub args: String,
}

impl Resource {
    /// Classifies a request target.
    ///
    /// Targets containing the configured marker segment are dynamic:
    /// everything after the first `?` becomes the argument string and the
    /// rest becomes the handler path. All other targets are static; a
    /// trailing `/` selects the configured index document.
    pub fn resolve(target: &str, cfg: &ContentConfig) -> Self {
        if !target.contains(&cfg.dynamic_marker) {
            let mut path = format!("{}{}", cfg.root, target);
            if target.ends_with('/') {
                path.push_str(&cfg.index_document);
            }

            Self {
                kind: ResourceKind::Static,
                path,
                args: String::new(),
            }
        } else {
            let (path_part, args) = match target.split_once('?') {
                Some((before, after)) => (before, after.to_string()),
                None => (target, String::new()),
            };

            Self {
                kind: ResourceKind::Dynamic,
                path: format!("{}{}", cfg.root, path_part),
                args,
            }
        }
    }
}

/// Whether the stat result describes something the server may serve:
/// a regular file with the owner-read bit set.
#[cfg(unix)]
pub fn is_servable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    meta.is_file() && meta.permissions().mode() & 0o400 != 0
}

#[cfg(not(unix))]
pub fn is_servable(meta: &Metadata) -> bool {
    meta.is_file()
}
