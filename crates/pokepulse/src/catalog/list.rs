use crate::prelude::{println, *};
use colored::Colorize;
use futures::future::join_all;
use indicatif::ProgressBar;
use pokepulse_core::catalog::{
    build_catalog_page, calculate_pagination, capitalize, cursor_page, extract_offset,
    filter_entries, format_entry_id, page_offset, stub_id, transform_pokemon, CatalogEntry,
    CatalogPage, ImageKind, PokemonListResponse,
};

use super::{fetch_pokemon, get_api_base, progress_spinner, set_spinner_msg};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Number of Pokémon per page
    #[arg(short, long, env = "POKEPULSE_LIMIT", default_value = "20")]
    pub limit: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Filter by name substring or exact Pokédex number (applied to the page)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by type (can be repeated: --type fire --type flying)
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Pagination cursor URL from a previous response (overrides --page)
    #[arg(long)]
    pub cursor: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parameters for fetching a catalog page
#[derive(Debug, Clone)]
pub struct ListPageParams {
    /// Entries per page
    pub limit: usize,
    /// 1-indexed page number
    pub page: usize,
    /// Name substring or exact id filter
    pub search: Option<String>,
    /// Type filters (an entry matches if it carries any of them)
    pub types: Vec<String>,
    /// Cursor URL from a previous response; overrides `page`
    pub cursor: Option<String>,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching Pokémon page {}...", options.page);
    }

    let params = ListPageParams {
        limit: options.limit,
        page: options.page,
        search: options.search.clone(),
        types: options.types.clone(),
        cursor: options.cursor.clone(),
    };

    let spinner = progress_spinner();
    let page_data = list_page_data(params, Some(&spinner)).await;
    spinner.finish_and_clear();
    let page_data = page_data?;

    if options.json {
        output_json(&page_data)?;
    } else {
        output_formatted(&page_data, &options)?;
    }

    Ok(())
}

/// Fetches one page of the Pokémon catalog and returns it as a structured
/// CatalogPage. Any entry that fails to load fails the page.
pub async fn list_page_data(
    params: ListPageParams,
    spinner: Option<&ProgressBar>,
) -> Result<CatalogPage> {
    let ListPageParams {
        limit,
        page,
        search,
        types,
        cursor,
    } = params;

    // A cursor URL pins the offset; otherwise the page number does.
    let page = match cursor.as_deref().and_then(extract_offset) {
        Some(offset) => cursor_page(offset, limit),
        None => page,
    };

    let client = reqwest::Client::new();

    set_spinner_msg(spinner, "Fetching Pokémon list...");
    let url = format!(
        "{}/pokemon?limit={}&offset={}",
        get_api_base(),
        limit,
        page_offset(page, limit)
    );
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| eyre!("Failed to fetch Pokémon list: {}", e))?;

    if !response.status().is_success() {
        return Err(eyre!(
            "Failed to fetch Pokémon list: HTTP {}",
            response.status()
        ));
    }

    let list: PokemonListResponse = response
        .json()
        .await
        .map_err(|e| eyre!("Failed to parse Pokémon list: {}", e))?;

    // Validate the page against the server-reported total
    calculate_pagination(list.count, page, limit).map_err(|e| eyre!("{}", e))?;

    set_spinner_msg(spinner, format!("Loading {} Pokémon...", list.results.len()));

    // Fetch full entries in parallel
    let entry_futures = list.results.iter().map(|stub| {
        let client = &client;
        let id = stub_id(stub);
        async move { fetch_pokemon(client, &id).await }
    });
    let entries = collect_page_entries(join_all(entry_futures).await)?;

    let search = search.unwrap_or_default();
    let selected_types: Vec<String> = types.iter().map(|kind| kind.to_lowercase()).collect();
    let entries = filter_entries(entries, &search, &selected_types);

    Ok(build_catalog_page(entries, list.count, page, limit))
}

/// Every stub on the page must load; one failed detail fetch fails the whole
/// page instead of quietly shortening it.
fn collect_page_entries(
    fetched: Vec<Result<pokepulse_core::catalog::ApiPokemon>>,
) -> Result<Vec<CatalogEntry>> {
    fetched
        .into_iter()
        .map(|result| result.map(transform_pokemon))
        .collect()
}

/// Convert a catalog page to a JSON string
fn format_list_json(page: &CatalogPage) -> Result<String> {
    serde_json::to_string_pretty(page).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a catalog page to formatted text with colors
fn format_list_text(page: &CatalogPage, options: &ListOptions) -> String {
    let mut result = String::new();
    let pagination = &page.pagination;

    let search_display = options.search.clone().unwrap_or_default();
    let filters_active = !search_display.is_empty() || !options.types.is_empty();

    // Header
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "POKÉMON CATALOG (Page {} of {})",
            pagination.current_page, pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if filters_active {
        let mut parts = Vec::new();
        if !search_display.is_empty() {
            parts.push(format!("search \"{search_display}\""));
        }
        if !options.types.is_empty() {
            parts.push(format!("types {}", options.types.join(", ")));
        }
        result.push_str(&format!(
            "{}\n",
            format!("Filters: {}", parts.join(" | ")).bright_black()
        ));
    }

    if page.entries.is_empty() {
        if filters_active {
            result.push_str(&format!(
                "\n{}\n",
                "No Pokémon found. Try adjusting your filters.".yellow()
            ));
        } else {
            result.push_str(&format!("\n{}\n", "No Pokémon on this page.".yellow()));
        }
    } else {
        for (idx, entry) in page.entries.iter().enumerate() {
            result.push_str(&format!(
                "\n{} {} {}\n",
                format!("[{}]", idx + 1).yellow().bold(),
                capitalize(&entry.name).white().bold(),
                format_entry_id(entry.id).bright_yellow()
            ));

            result.push_str(&format!(
                "    {}: {}\n",
                "Types".green(),
                entry.types.join(", ").bright_magenta()
            ));

            if let Some(image) = entry.display_image() {
                let label = match image.kind {
                    ImageKind::Artwork => "Artwork",
                    ImageKind::Sprite => "Sprite",
                };
                result.push_str(&format!(
                    "    {}: {}\n",
                    label.green(),
                    image.url.cyan().underline()
                ));
            }

            result.push_str(&format!(
                "    {}: {}\n",
                "Show".green(),
                format!("pokepulse catalog show {}", entry.name).cyan()
            ));
        }
    }

    // Navigation section
    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.to_string().bright_cyan().bold(),
        pagination.total_count.to_string().bright_cyan().bold(),
        "total Pokémon".bright_white()
    ));
    if filters_active {
        result.push_str(&format!(
            "{}\n",
            format!("{} match the filters on this page", page.entries.len()).bright_white()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }
    if pagination.current_page == pagination.total_pages && pagination.current_page > 1 {
        result.push_str(&format!(
            "  {}: {}\n",
            "First page".green(),
            "pokepulse catalog list --page 1".cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To change page size".bright_white().bold()
    ));
    result.push_str(&format!(
        "  {}\n",
        "pokepulse catalog list --limit <number>".cyan()
    ));

    result.push_str(&format!("\n{}:\n", "To filter".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        "pokepulse catalog list --search <name or id>".cyan()
    ));
    result.push_str(&format!(
        "  {}\n",
        "pokepulse catalog list --type <type>  (see: pokepulse catalog types)".cyan()
    ));

    result.push_str(&format!(
        "\n{}:\n",
        "To show one Pokémon".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "pokepulse catalog show <name or id>".cyan()));
    if let Some(first) = page.entries.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("pokepulse catalog show {}", first.name).cyan()
        ));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "pokepulse catalog list --json".cyan()));

    result.push('\n');
    result
}

fn output_json(page: &CatalogPage) -> Result<()> {
    let json = format_list_json(page)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(page: &CatalogPage, options: &ListOptions) -> Result<()> {
    let formatted = format_list_text(page, options);
    print!("{}", formatted);
    Ok(())
}
