use contracts::system::auth::UserInfo;
use wasm_bindgen::JsCast;
use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session. The token is mirrored into a cookie so the server's
/// auth gate sees it on page navigations; the gate checks presence only.
pub fn save_session(token: &str, user: &UserInfo) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
    set_cookie(&format!("auth_token={}; Path=/; SameSite=Lax", token));
}

pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

/// Clear the session, including the cookie the server gate reads.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
    set_cookie("auth_token=; Path=/; Max-Age=0; SameSite=Lax");
}

fn set_cookie(value: &str) {
    let document = window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
    if let Some(document) = document {
        let _ = document.set_cookie(value);
    }
}
