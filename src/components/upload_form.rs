//! Upload Form Component
//!
//! Native file picker plus the submit control. Submitting disables the
//! control and swaps its label for 3 seconds; the reset is purely
//! time-based and unrelated to any real upload completing, which this app
//! keeps as a cosmetic placeholder. File validation (extension allow-list,
//! 100MB cap) happens before a card is added to the gallery.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use dioxus::prelude::*;
use rfd::FileDialog;
use showreel_core::forms::{
    FILE_TOO_LARGE_MSG, INVALID_FILE_TYPE_MSG, NO_FILE_SELECTED_MSG, UPLOAD_ERROR_MSG,
    UPLOAD_RESET_MS, UPLOAD_SUCCESS_MSG,
};
use showreel_core::{
    allowed_file, UploadButton, Video, ALLOWED_EXTENSIONS, DEFAULT_CATEGORY, MAX_CONTENT_LENGTH,
};

use crate::context::{use_content, use_epoch, use_flash, use_reveal};

/// Video upload form
#[component]
pub fn UploadForm() -> Element {
    let mut content = use_content();
    let mut flash = use_flash();
    let mut reveal = use_reveal();
    let epoch = use_epoch();

    let mut button = use_signal(|| UploadButton::new("Upload Video"));
    let mut picked: Signal<Option<PathBuf>> = use_signal(|| None);

    let pick_file = move |_| {
        spawn(async move {
            // File picker is blocking; run it off the UI thread.
            let path = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("video", &ALLOWED_EXTENSIONS)
                    .set_title("Select Video")
                    .pick_file()
            })
            .await;

            match path {
                Ok(Some(path)) => picked.set(Some(path)),
                Ok(None) => {}
                Err(e) => tracing::error!(error = %e, "file picker task failed"),
            }
        });
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if button.read().is_disabled() {
            return;
        }

        button.write().press(epoch.now_ms());
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(UPLOAD_RESET_MS)).await;
            button.write().tick(epoch.now_ms());
        });

        let Some(path) = picked() else {
            flash.write().push(NO_FILE_SELECTED_MSG);
            return;
        };

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        if filename.is_empty() {
            flash.write().push(NO_FILE_SELECTED_MSG);
            return;
        }
        if !allowed_file(&filename) {
            tracing::warn!(filename = %filename, "rejected upload: bad extension");
            flash.write().push(INVALID_FILE_TYPE_MSG);
            return;
        }

        match std::fs::metadata(&path) {
            Ok(meta) if meta.len() > MAX_CONTENT_LENGTH => {
                tracing::warn!(filename = %filename, size = meta.len(), "rejected upload: too large");
                flash.write().push(FILE_TOO_LARGE_MSG);
            }
            Ok(_) => {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("untitled");
                let video = Video {
                    public_id: format!("portfolio_uploads/{stem}"),
                    url: format!("file://{}", path.display()),
                    title: stem.replace(['-', '_'], " "),
                    category: Some(DEFAULT_CATEGORY.to_string()),
                    created_at: Utc::now(),
                };
                tracing::info!(public_id = %video.public_id, "video added to gallery");
                // The intersection observer only covers elements present at
                // mount; cards added now are marked revealed directly so
                // they render at full opacity.
                reveal.write().observe(&video.dom_id(), 1.0);
                content.write().add_video(video);
                flash.write().push(UPLOAD_SUCCESS_MSG);
                picked.set(None);
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %filename, "could not read upload");
                flash.write().push(UPLOAD_ERROR_MSG);
            }
        }
    };

    let chosen = picked
        .read()
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .map(str::to_string);

    rsx! {
        form { class: "upload-form", onsubmit: on_submit,
            div { class: "upload-row",
                button {
                    class: "btn-pick",
                    r#type: "button",
                    onclick: pick_file,
                    "Choose File"
                }
                span { class: "upload-filename",
                    if let Some(name) = chosen {
                        "{name}"
                    } else {
                        "no file chosen"
                    }
                }
            }
            button {
                class: "btn-upload",
                r#type: "submit",
                disabled: button.read().is_disabled(),
                "{button.read().label()}"
            }
        }
    }
}
