// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Stylesheet and javascript declarations.
//!
//! ```yaml
//! stylesheets:
//!   - css/admin.css                       # media: all
//!   - { path: css/print.css, media: print }
//! javascripts:
//!   - js/admin.js
//!   - { path: js/extra.js }
//!   - { route: admin_translations, routeparams: { locale: en } }
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::{
    descriptor::OptionMap,
    error::{AdminError, Result}
};

/// Media of a stylesheet declared as a bare path.
pub const DEFAULT_MEDIA: &str = "all";

/// URL generation collaborator for route-based javascripts.
pub trait RouteGenerator {
    /// Generate the path of `route` with `params`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::UnknownRoute`] when the route cannot be built.
    fn generate(&self, route: &str, params: &OptionMap) -> Result<String>;
}

/// Stylesheet asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    /// Asset path.
    pub path:  String,
    /// Media query.
    pub media: String
}

/// Javascript asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Javascript {
    /// Asset path or generated route.
    pub path: String
}

pub(crate) fn stylesheets(key: &str, entries: &[Value], out: &mut Vec<Stylesheet>) -> Result<()> {
    for entry in entries {
        let stylesheet = match entry {
            Value::String(path) => Stylesheet {
                path:  path.clone(),
                media: DEFAULT_MEDIA.to_owned()
            },
            Value::Object(entry) => Stylesheet {
                path:  required(key, entry, "path")?.to_owned(),
                media: match entry.get("media") {
                    None | Some(Value::Null) => DEFAULT_MEDIA.to_owned(),
                    Some(Value::String(media)) => media.clone(),
                    Some(_) => return Err(AdminError::config(key, "media must be a string"))
                }
            },
            _ => return Err(AdminError::config(key, "expected a path or a {path, media} entry"))
        };
        out.push(stylesheet);
    }
    Ok(())
}

pub(crate) fn javascripts(
    key: &str,
    entries: &[Value],
    router: Option<&dyn RouteGenerator>,
    out: &mut Vec<Javascript>
) -> Result<()> {
    for entry in entries {
        let path = match entry {
            Value::String(path) => path.clone(),
            Value::Object(entry) if entry.contains_key("route") => {
                let route = required(key, entry, "route")?;
                let params = match entry.get("routeparams") {
                    None | Some(Value::Null) => OptionMap::new(),
                    Some(Value::Object(params)) => params.clone(),
                    Some(_) => return Err(AdminError::config(key, "routeparams must be a mapping"))
                };
                let router = router.ok_or_else(|| AdminError::UnknownRoute {
                    route:  route.to_owned(),
                    reason: "no route generator configured".into()
                })?;
                router.generate(route, &params)?
            }
            Value::Object(entry) => required(key, entry, "path")?.to_owned(),
            _ => return Err(AdminError::config(key, "expected a path, {path} or {route, routeparams} entry"))
        };
        out.push(Javascript { path });
    }
    Ok(())
}

fn required<'a>(key: &str, entry: &'a OptionMap, field: &str) -> Result<&'a str> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AdminError::config(key, format!("entry without a string `{field}`")))
}
