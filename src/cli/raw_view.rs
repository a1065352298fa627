use crate::data::TripTable;
use crate::errors::AppResult;
use crate::ui::Console;
use crate::utils::date::weekday_name;
use crate::utils::table::Table;
use std::io::{BufRead, Write};

/// Page through `table`, `page_size` rows per confirmed "yes".
///
/// Returns the number of pages shown.
pub fn view_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    page_size: usize,
) -> AppResult<usize> {
    let prompt = format!("\nWould you like to view {page_size} lines of raw data? Enter yes or no.\n");
    let mut offset = 0;
    let mut pages = 0;

    loop {
        if !console.confirm(&prompt)? {
            break;
        }
        let page = table.page(offset, page_size);
        if page.is_empty() {
            console.info("No more rows to show.")?;
            break;
        }

        let mut headers = vec![String::new()];
        headers.extend(table.headers().iter().cloned());
        headers.push("month".into());
        headers.push("day_of_week".into());

        let mut grid = Table::with_headers(headers.as_slice());
        for trip in page {
            let mut row = vec![trip.row.to_string()];
            row.extend(trip.fields.iter().cloned());
            row.push(trip.month_number().to_string());
            row.push(weekday_name(trip.weekday()).to_string());
            grid.add_row(row);
        }
        console.line(grid.render())?;

        offset += page_size;
        pages += 1;
    }

    Ok(pages)
}
