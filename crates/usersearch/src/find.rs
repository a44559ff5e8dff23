use crate::prelude::{eprintln, println, *};
use usersearch::{OrderBy, SearchClient, SearchRequest, SearchResponse};

const ABOUT_WIDTH: usize = 60;

/// Options for a single search call
#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
#[command(after_help = "EXAMPLES:
  # First page of users whose name or about text contains \"Dillard\":
  usersearch find Dillard --limit 5

  # Oldest first (the server inverts desc, see NOTES):
  usersearch find --order-field Age --order-by asc

  # Third page of ten, as JSON:
  usersearch find --limit 10 --offset 20 --json

NOTES:
  - --order-field must be Id, Age or Name; the server rejects anything else
  - --order-by accepts asc, as-is, desc or -1, 0, 1
  - The reference server sorts ascending values first when desc is requested
  - A command for the following page is printed when more rows exist")]
pub struct FindOptions {
    /// Text matched against name and about, empty for no filter
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of users to return
    #[arg(short, long, default_value = "25", allow_negative_numbers = true)]
    pub limit: i64,

    /// Number of rows to skip
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub offset: i64,

    /// Sort key: Id, Age or Name, empty for server default
    #[arg(long, default_value = "")]
    pub order_field: String,

    /// Sort direction
    #[arg(long, default_value = "as-is", allow_negative_numbers = true)]
    pub order_by: OrderBy,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl FindOptions {
    fn to_request(&self) -> SearchRequest {
        let mut request = SearchRequest::new(self.query.clone())
            .with_limit(self.limit)
            .with_offset(self.offset)
            .with_raw_order_field(self.order_field.clone());
        request.order_by = self.order_by;
        request
    }
}

pub async fn run(options: FindOptions, global: crate::Global) -> Result<()> {
    let config = global.client_config()?;

    if global.verbose {
        eprintln!("Search server: {}", config.base_url);
        eprintln!();
    }

    let client = SearchClient::new(config).context("Failed to create search client")?;
    let response = client
        .find_users(&options.to_request())
        .await
        .context("Search failed")?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    output_formatted(&response, &options);

    Ok(())
}

fn output_formatted(response: &SearchResponse, options: &FindOptions) {
    println!("Found {} user(s):\n", response.users.len());

    if response.users.is_empty() {
        println!("No users found.");
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row![
            "Id".bold().cyan(),
            "Name".bold().cyan(),
            "Age".bold().cyan(),
            "Gender".bold().cyan(),
            "About".bold().cyan()
        ]);

        for user in &response.users {
            table.add_row(prettytable::row![
                user.id,
                user.name,
                user.age,
                user.gender,
                truncate_text(user.about.trim(), ABOUT_WIDTH)
            ]);
        }

        table.printstd();
    }

    if let Some(command) = next_page_command(response, options) {
        eprintln!("\nTo fetch the next page, run:\n  {}", command.cyan());
    }
}

/// Command line for the page after `response`, if there is one
fn next_page_command(response: &SearchResponse, options: &FindOptions) -> Option<String> {
    if !response.next_page {
        return None;
    }

    let mut command = f!(
        "usersearch find {} --limit {} --offset {}",
        shell_quote(&options.query),
        options.limit,
        options.offset + response.users.len() as i64
    );
    if !options.order_field.is_empty() {
        command.push_str(&f!(
            " --order-field {} --order-by {}",
            options.order_field, options.order_by
        ));
    }

    Some(command)
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        f!("{cut}...")
    }
}
