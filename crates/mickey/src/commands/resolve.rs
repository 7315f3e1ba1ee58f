//! Invite redirect inspection command.

use anyhow::Result;
use mickey_views::{redirect, RecordingNavigator};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    location: &'a str,
    redirect: Option<String>,
    doubled_admin: bool,
}

fn resolve(location: &str) -> Resolution<'_> {
    let mut navigator = RecordingNavigator::new();
    let redirect = redirect::redirect_on_mount(Some(location), &mut navigator);

    Resolution {
        location,
        doubled_admin: redirect.is_some() && redirect::is_already_admin(location),
        redirect,
    }
}

/// Run the resolve command.
pub fn run(location: &str, json: bool) -> Result<()> {
    let resolution = resolve(location);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    match &resolution.redirect {
        Some(target) => println!("{}", target),
        None => println!("no redirect"),
    }

    Ok(())
}
