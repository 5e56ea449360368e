//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

use crate::domain::entities::Manifest;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event carrying a built manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub file_name: &'a str,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub emitted: bool,
    pub manifest: &'a Manifest,
}

impl<'a> ManifestEvent<'a> {
    pub fn new(command: &'a str, file_name: &'a str, size: usize, manifest: &'a Manifest) -> Self {
        Self {
            event: "manifest",
            command,
            file_name,
            size,
            path: None,
            emitted: false,
            manifest,
        }
    }

    pub fn emitted_to(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self.emitted = true;
        self
    }
}

/// Event summarizing the difference to a previously published manifest.
#[derive(Debug, Clone, Serialize)]
pub struct DiffEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    /// The file on disk would be rewritten
    pub changes: bool,
    pub added: &'a [String],
    pub changed: &'a [String],
    pub removed: &'a [String],
}

impl<'a> DiffEvent<'a> {
    pub fn new(
        command: &'a str,
        changes: bool,
        added: &'a [String],
        changed: &'a [String],
        removed: &'a [String],
    ) -> Self {
        Self {
            event: "diff",
            command,
            changes,
            added,
            changed,
            removed,
        }
    }
}

/// One classified filename (`classify` command).
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyEvent<'a> {
    pub event: &'static str,
    pub filename: &'a str,
    pub tag: &'a str,
    pub image: bool,
}

impl<'a> ClassifyEvent<'a> {
    pub fn new(filename: &'a str, tag: &'a str, image: bool) -> Self {
        Self {
            event: "classify",
            filename,
            tag,
            image,
        }
    }
}

/// Event emitted when a command completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            duration_ms: None,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            duration_ms: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}
