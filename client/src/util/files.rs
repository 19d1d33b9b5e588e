//! Browser file handles for uploads.
//!
//! SYSTEM CONTEXT
//! ==============
//! A picked `web_sys::File` is a JS object and cannot live in a reactive
//! signal. Components keep a [`PickedFile`] (plain data: registry key, name,
//! MIME type, size, image preview URL) and the JS handle stays in a
//! thread-local registry until the upload is sent or the picker is cleared.
//!
//! Every registered file must eventually be passed to [`release`] so its
//! preview object URL is revoked.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use std::sync::atomic::{AtomicU64, Ordering};

use records::FileMeta;
#[cfg(feature = "hydrate")]
use records::UploadKind;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// A file chosen through an input or a drop, described without JS handles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    pub key: u64,
    pub meta: FileMeta,
    /// Object URL for image previews.
    pub preview_url: Option<String>,
}

impl PickedFile {
    /// Describe a file that has no browser handle (tests, SSR).
    #[must_use]
    pub fn detached(meta: FileMeta) -> Self {
        Self { key: next_key(), meta, preview_url: None }
    }

    /// Human-readable size for the file chip.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_size(self.meta.size)
    }
}

fn next_key() -> u64 {
    NEXT_KEY.fetch_add(1, Ordering::Relaxed)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KIB {
        format!("{bytes} B")
    } else if value < KIB * KIB {
        format!("{:.1} KB", value / KIB)
    } else {
        format!("{:.1} MB", value / (KIB * KIB))
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static REGISTRY: std::cell::RefCell<std::collections::HashMap<u64, web_sys::File>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

/// Keep `file` for a later upload. Image files also get a preview URL.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn register(file: web_sys::File, kind: UploadKind) -> PickedFile {
    let meta = FileMeta::new(file.name(), file.type_(), file.size().max(0.0) as u64);
    let preview_url = if kind == UploadKind::Image {
        web_sys::Url::create_object_url_with_blob(&file).ok()
    } else {
        None
    };
    let key = next_key();
    REGISTRY.with(|registry| registry.borrow_mut().insert(key, file));
    PickedFile { key, meta, preview_url }
}

/// Forget a file and revoke its preview URL.
pub fn release(picked: &PickedFile) {
    #[cfg(feature = "hydrate")]
    {
        REGISTRY.with(|registry| registry.borrow_mut().remove(&picked.key));
        if let Some(url) = &picked.preview_url {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = picked;
    }
}

pub fn release_all<'a>(picked: impl IntoIterator<Item = &'a PickedFile>) {
    for file in picked {
        release(file);
    }
}

/// Run `f` with the browser handle behind `picked`, if it is still registered.
#[cfg(feature = "hydrate")]
pub fn with_file<R>(picked: &PickedFile, f: impl FnOnce(&web_sys::File) -> R) -> Option<R> {
    REGISTRY.with(|registry| registry.borrow().get(&picked.key).map(f))
}

/// First file selected in an `<input type="file">` change event.
#[cfg(feature = "hydrate")]
pub fn from_input_event(ev: &web_sys::Event, kind: UploadKind) -> Option<PickedFile> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    // Reset so choosing the same file again still fires `change`.
    input.set_value("");
    Some(register(file, kind))
}

/// First file carried by a drop event.
#[cfg(feature = "hydrate")]
pub fn from_drop_event(ev: &web_sys::DragEvent, kind: UploadKind) -> Option<PickedFile> {
    let file = ev.data_transfer()?.files()?.get(0)?;
    Some(register(file, kind))
}
