use anyhow::{Context, Result};
use deskcal_core::{CalendarSession, Storage};

use crate::render::render_search;

pub fn run<S: Storage>(
    session: &mut CalendarSession<S>,
    query: String,
    json: bool,
) -> Result<()> {
    session.set_query(query);
    let hits = session.search_results();

    if json {
        let out =
            serde_json::to_string_pretty(&hits).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        println!("{}", render_search(&hits));
    }

    Ok(())
}
