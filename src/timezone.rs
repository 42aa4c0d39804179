use chrono_tz::Tz;
use wasm_bindgen::JsValue;
use web_sys::js_sys;

/// Zone used when the browser does not report one we recognise.
pub const FALLBACK_ZONE: Tz = Tz::UTC;

/// IANA name the browser reports, e.g. "Europe/Helsinki".
fn browser_zone_name() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    let options = format.resolved_options();
    js_sys::Reflect::get(&options, &JsValue::from_str("timeZone"))
        .ok()
        .and_then(|value| value.as_string())
}

/// Maps an IANA name to a zone, falling back to UTC.
pub fn resolve_zone(name: Option<&str>) -> Tz {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            log::warn!("Unknown time zone {:?}, showing times in UTC", name);
            FALLBACK_ZONE
        }),
        None => FALLBACK_ZONE,
    }
}

/// The viewer's zone. Event times and month filters are shown in it.
pub fn viewer_zone() -> Tz {
    let zone = resolve_zone(browser_zone_name().as_deref());
    log::debug!("Viewer time zone: {}", zone.name());
    zone
}
