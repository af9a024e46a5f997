//! Progress bar display for archive downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for one archive download. Byte-accurate when the server
/// reports a content length, a spinner otherwise.
#[allow(clippy::unwrap_used)] // static templates
pub fn download_bar(total: Option<u64>) -> ProgressBar {
    match total {
        Some(len) => {
            let style = ProgressStyle::default_bar()
                .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                .unwrap()
                .progress_chars("#>-");
            let pb = ProgressBar::new(len);
            pb.set_style(style);
            pb
        }
        None => {
            let style = ProgressStyle::default_spinner()
                .template("{spinner} {bytes} {msg}")
                .unwrap();
            let pb = ProgressBar::new_spinner();
            pb.set_style(style);
            pb
        }
    }
}
