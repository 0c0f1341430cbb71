use crate::core::client::document::DocumentClient;
use crate::types::movie::{Movie, MovieInfo};
use crate::{CloudcheckError, CloudcheckResult};
use tracing::info;

/// Rating written by the update step
const UPDATED_RATING: f64 = 0.5;

fn sample_movie() -> Movie {
    Movie {
        year: 2015,
        title: "The Big New Movie".to_string(),
        info: MovieInfo { plot: "Nothing happens at all.".to_string(), rating: 0.0 },
    }
}

/// Collect every table name, following the continuation token until the
/// service stops returning one.
pub async fn list_tables(client: &dyn DocumentClient) -> CloudcheckResult<Vec<String>> {
    let mut names = Vec::new();
    let mut exclusive_start: Option<String> = None;

    loop {
        let page = client.list_tables_page(exclusive_start.take()).await?;
        names.extend(page.names);

        match page.last_evaluated {
            Some(token) => exclusive_start = Some(token),
            None => break,
        }
    }

    Ok(names)
}

/// The document store walkthrough: list tables, then run a put / get /
/// update / delete round trip on a sample record and verify each step.
pub async fn run(client: &dyn DocumentClient) -> CloudcheckResult<()> {
    let tables = list_tables(client).await?;
    info!(count = tables.len(), "Tables visible to this account");
    for name in &tables {
        info!("* {}", name);
    }

    let movie = sample_movie();
    client.put_movie(&movie).await?;
    info!("Added '{}' ({}) to the table", movie.title, movie.year);

    let fetched = client
        .get_movie(movie.year, &movie.title)
        .await?
        .ok_or_else(|| CloudcheckError::CheckFailedError(format!("'{}' missing right after put", movie.title)))?;
    if fetched != movie {
        return Err(CloudcheckError::CheckFailedError(format!(
            "'{}' came back different from what was written",
            movie.title
        )));
    }
    info!(year = fetched.year, title = %fetched.title, plot = %fetched.info.plot, rating = fetched.info.rating, "Found item");

    let new_rating = client.update_rating(movie.year, &movie.title, UPDATED_RATING).await?;
    info!(rating = ?new_rating, "Updated '{}' rating", movie.title);

    client.delete_movie(movie.year, &movie.title).await?;
    if client.get_movie(movie.year, &movie.title).await?.is_some() {
        return Err(CloudcheckError::CheckFailedError(format!("'{}' still present after delete", movie.title)));
    }
    info!("Deleted '{}' ({})", movie.title, movie.year);

    Ok(())
}
