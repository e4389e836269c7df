//! Small DOM and file helpers for the dashboard.

use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::DashboardPage;
use crate::toast::show_toast;
use common::model::form::check_image_file;

/// Native confirm dialog. `false` when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Validates the picked file (image type, 2 MB ceiling) and reads it into
/// a data URL for the form preview. Rejections become toasts and nothing
/// is read.
pub fn read_picked_image(link: Scope<DashboardPage>, file: web_sys::File) {
    let file = gloo_file::File::from(file);
    if let Err(e) = check_image_file(&file.raw_mime_type(), file.size()) {
        show_toast(&e.to_string());
        return;
    }
    spawn_local(async move {
        match gloo_file::futures::read_as_data_url(&file).await {
            Ok(data_url) => link.send_message(Msg::ImageLoaded(data_url)),
            Err(e) => {
                gloo_console::error!(format!("Reading picked file failed: {e}"));
                show_toast("Could not read the selected file");
            }
        }
    });
}
