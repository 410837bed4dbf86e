use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entries shown per catalog page when no limit is given.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Placeholder shown when a species has no entry in the requested language.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Placeholder genus when a species has none in the requested language.
pub const DEFAULT_GENUS: &str = "Pokémon";

/// Base stats top out at 255 on the reference scale used for bars.
const STAT_SCALE_MAX: f64 = 255.0;

// ---------------------------------------------------------------------------
// API response models (pokeapi.co shapes)
// ---------------------------------------------------------------------------

/// A `{ name, url }` stub as returned by the paged list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceStub {
    pub name: String,
    pub url: String,
}

/// Paged response from `/pokemon`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonListResponse {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ResourceStub>,
}

/// Response from `/type`.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeListResponse {
    pub results: Vec<ResourceStub>,
}

/// One Pokémon as returned by `/pokemon/{name or id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub sprites: SpriteSet,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub species: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

/// One species as returned by `/pokemon-species/{id}`, trimmed to the fields
/// the catalog shows.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSpecies {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub genera: Vec<GenusEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedRef,
}

// ---------------------------------------------------------------------------
// Output models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Artwork,
    Sprite,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageLink {
    pub kind: ImageKind,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatValue {
    pub name: String,
    pub value: u32,
}

/// One catalog entry shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    /// Preferred image first (artwork over sprite).
    pub images: Vec<ImageLink>,
    pub types: Vec<String>,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
}

impl CatalogEntry {
    pub fn display_image(&self) -> Option<&ImageLink> {
        self.images.first()
    }
}

/// Catalog entry plus its species data, for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogDetail {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub genus: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub limit: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// One page of catalog entries plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub entries: Vec<CatalogEntry>,
    pub pagination: PageInfo,
}

// ---------------------------------------------------------------------------
// Transformations
// ---------------------------------------------------------------------------

/// Convert an API Pokémon into a display-ready catalog entry.
pub fn transform_pokemon(pokemon: ApiPokemon) -> CatalogEntry {
    let mut images = Vec::new();
    if let Some(url) = pokemon.sprites.other.official_artwork.front_default {
        images.push(ImageLink {
            kind: ImageKind::Artwork,
            url,
        });
    }
    if let Some(url) = pokemon.sprites.front_default {
        images.push(ImageLink {
            kind: ImageKind::Sprite,
            url,
        });
    }

    CatalogEntry {
        id: pokemon.id,
        name: pokemon.name,
        images,
        types: pokemon.types.into_iter().map(|slot| slot.kind.name).collect(),
        stats: pokemon
            .stats
            .into_iter()
            .map(|slot| StatValue {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
        abilities: pokemon
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        height_m: f64::from(pokemon.height) / 10.0,
        weight_kg: f64::from(pokemon.weight) / 10.0,
    }
}

/// Combine a Pokémon with its species data into the detail view model.
pub fn build_catalog_detail(
    pokemon: ApiPokemon,
    species: &PokemonSpecies,
    language: &str,
) -> CatalogDetail {
    CatalogDetail {
        genus: genus(species, language),
        description: flavor_text(species, language),
        entry: transform_pokemon(pokemon),
    }
}

/// First flavor text in `language`, with the form feeds the API embeds
/// squashed to spaces. Falls back to [`NO_DESCRIPTION`].
pub fn flavor_text(species: &PokemonSpecies, language: &str) -> String {
    species
        .flavor_text_entries
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| entry.flavor_text.replace('\u{c}', " "))
        .unwrap_or_else(|| String::from(NO_DESCRIPTION))
}

/// Genus in `language`, falling back to [`DEFAULT_GENUS`].
pub fn genus(species: &PokemonSpecies, language: &str) -> String {
    species
        .genera
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| entry.genus.clone())
        .unwrap_or_else(|| String::from(DEFAULT_GENUS))
}

/// Entity id from a stub's resource URL (the trailing path segment), falling
/// back to the stub's name when the URL does not carry one.
pub fn stub_id(stub: &ResourceStub) -> String {
    stub.url
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
        .unwrap_or_else(|| stub.name.clone())
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Search-box semantics: case-insensitive name substring, or an exact id
/// match. An empty query matches everything.
pub fn matches_query(entry: &CatalogEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(&query.to_lowercase())
        || entry.id.to_string() == query
}

/// Whether the entry carries any of the selected types. An empty selection
/// matches everything.
pub fn matches_types(entry: &CatalogEntry, selected: &[String]) -> bool {
    selected.is_empty() || entry.types.iter().any(|kind| selected.contains(kind))
}

/// Apply both catalog filters to a page of entries.
pub fn filter_entries(
    entries: Vec<CatalogEntry>,
    query: &str,
    selected_types: &[String],
) -> Vec<CatalogEntry> {
    entries
        .into_iter()
        .filter(|entry| matches_query(entry, query) && matches_types(entry, selected_types))
        .collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Calculate the item window for a 1-indexed page, validating the page
/// against the total. An empty set has no pages at all.
pub fn calculate_pagination(
    total_items: usize,
    page: usize,
    limit: usize,
) -> Result<(usize, usize), String> {
    if total_items == 0 {
        return Err(String::from("No items available for pagination"));
    }

    if page == 0 {
        return Err(String::from("Page must be at least 1."));
    }

    let total_pages = total_items.div_ceil(limit.max(1));
    if page > total_pages {
        return Err(format!(
            "Page {} is out of range. Only {} pages available.",
            page, total_pages
        ));
    }

    let start = (page - 1) * limit;
    let end = std::cmp::min(start + limit, total_items);
    Ok((start, end))
}

/// Offset of a 1-indexed page.
pub fn page_offset(page: usize, limit: usize) -> usize {
    (page.max(1) - 1) * limit
}

/// Page a cursor offset lands on.
pub fn cursor_page(offset: usize, limit: usize) -> usize {
    offset / limit.max(1) + 1
}

/// Pull the `offset` query parameter out of a pagination cursor URL.
pub fn extract_offset(url: &str) -> Option<usize> {
    let re = Regex::new(r"[?&]offset=(\d+)").unwrap();
    re.captures(url)?.get(1)?.as_str().parse().ok()
}

/// Assemble a catalog page with its navigation metadata.
pub fn build_page_info(total_count: usize, page: usize, limit: usize) -> PageInfo {
    let total_pages = total_count.div_ceil(limit.max(1));

    let limit_flag = if limit == DEFAULT_PAGE_SIZE {
        String::new()
    } else {
        format!(" --limit {}", limit)
    };

    let next_page_command = (page < total_pages)
        .then(|| format!("pokepulse catalog list --page {}{}", page + 1, limit_flag));
    let prev_page_command = (page > 1)
        .then(|| format!("pokepulse catalog list --page {}{}", page - 1, limit_flag));

    PageInfo {
        current_page: page,
        total_pages,
        total_count,
        limit,
        next_page_command,
        prev_page_command,
    }
}

pub fn build_catalog_page(
    entries: Vec<CatalogEntry>,
    total_count: usize,
    page: usize,
    limit: usize,
) -> CatalogPage {
    CatalogPage {
        entries,
        pagination: build_page_info(total_count, page, limit),
    }
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

/// `#NNN` Pokédex badge, zero-padded to three digits.
pub fn format_entry_id(id: u32) -> String {
    format!("#{:03}", id)
}

pub fn format_height(height_m: f64) -> String {
    format!("{:.1}m", height_m)
}

pub fn format_weight(weight_kg: f64) -> String {
    format!("{:.1}kg", weight_kg)
}

/// Display names for the six base stats, as the API reports them. Unknown
/// stats pass through unchanged.
pub fn format_stat_name(stat: &str) -> &str {
    match stat {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    }
}

/// Ability slugs use dashes; display them with spaces.
pub fn format_ability(ability: &str) -> String {
    ability.replace('-', " ")
}

/// A base stat as a 0-100 percentage of the display scale, capped at 100.
pub fn stat_percent(value: u32) -> f64 {
    (f64::from(value) / STAT_SCALE_MAX * 100.0).min(100.0)
}

/// Uppercase the first letter, leaving the rest of the name alone.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU_JSON: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://sprites.example/pokemon/25.png",
            "front_shiny": "https://sprites.example/pokemon/shiny/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://sprites.example/official-artwork/25.png"
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "https://pokeapi.co/api/v2/ability/9/" }, "is_hidden": false, "slot": 1 },
            { "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" }, "is_hidden": true, "slot": 3 }
        ],
        "species": { "name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/" }
    }"#;

    const SPECIES_JSON: &str = r#"{
        "flavor_text_entries": [
            {
                "flavor_text": "Quand il s'énerve, il libère\fde l'électricité.",
                "language": { "name": "fr", "url": "https://pokeapi.co/api/v2/language/5/" }
            },
            {
                "flavor_text": "When several of\nthese POKéMON gather,\ftheir electricity could build and cause lightning storms.",
                "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" }
            }
        ],
        "genera": [
            { "genus": "Pokémon Souris", "language": { "name": "fr", "url": "https://pokeapi.co/api/v2/language/5/" } },
            { "genus": "Mouse Pokémon", "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" } }
        ]
    }"#;

    fn sample_pokemon() -> ApiPokemon {
        serde_json::from_str(PIKACHU_JSON).unwrap()
    }

    fn sample_species() -> PokemonSpecies {
        serde_json::from_str(SPECIES_JSON).unwrap()
    }

    fn make_entry(id: u32, name: &str, types: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            images: Vec::new(),
            types: types.iter().map(|kind| kind.to_string()).collect(),
            stats: Vec::new(),
            abilities: Vec::new(),
            height_m: 1.0,
            weight_kg: 10.0,
        }
    }

    #[test]
    fn test_api_pokemon_parses_renamed_fields() {
        let pokemon = sample_pokemon();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert_eq!(
            pokemon.sprites.other.official_artwork.front_default.as_deref(),
            Some("https://sprites.example/official-artwork/25.png")
        );
        assert_eq!(
            pokemon.species.url,
            "https://pokeapi.co/api/v2/pokemon-species/25/"
        );
    }

    #[test]
    fn test_transform_pokemon() {
        let entry = transform_pokemon(sample_pokemon());

        assert_eq!(entry.id, 25);
        assert_eq!(entry.name, "pikachu");
        assert_eq!(entry.types, vec!["electric"]);
        assert_eq!(entry.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(entry.height_m, 0.4);
        assert_eq!(entry.weight_kg, 6.0);
        assert_eq!(entry.stats.len(), 3);
        assert_eq!(entry.stats[0].name, "hp");
        assert_eq!(entry.stats[0].value, 35);
    }

    #[test]
    fn test_transform_pokemon_prefers_artwork() {
        let entry = transform_pokemon(sample_pokemon());

        assert_eq!(entry.images.len(), 2);
        assert_eq!(entry.images[0].kind, ImageKind::Artwork);
        assert_eq!(entry.images[1].kind, ImageKind::Sprite);
        assert_eq!(
            entry.display_image().map(|link| link.kind),
            Some(ImageKind::Artwork)
        );
    }

    #[test]
    fn test_transform_pokemon_falls_back_to_sprite() {
        let mut pokemon = sample_pokemon();
        pokemon.sprites.other.official_artwork.front_default = None;

        let entry = transform_pokemon(pokemon);
        assert_eq!(entry.images.len(), 1);
        assert_eq!(entry.display_image().map(|link| link.kind), Some(ImageKind::Sprite));

        let mut pokemon = sample_pokemon();
        pokemon.sprites.other.official_artwork.front_default = None;
        pokemon.sprites.front_default = None;

        let entry = transform_pokemon(pokemon);
        assert!(entry.display_image().is_none());
    }

    #[test]
    fn test_flavor_text_picks_language_and_squashes_form_feeds() {
        let species = sample_species();

        let text = flavor_text(&species, "en");
        assert!(text.starts_with("When several of"));
        assert!(!text.contains('\u{c}'));
        // Newlines are kept; only form feeds are squashed.
        assert!(text.contains('\n'));

        assert_eq!(flavor_text(&species, "de"), NO_DESCRIPTION);
    }

    #[test]
    fn test_genus_falls_back() {
        let species = sample_species();
        assert_eq!(genus(&species, "en"), "Mouse Pokémon");
        assert_eq!(genus(&species, "de"), DEFAULT_GENUS);
    }

    #[test]
    fn test_build_catalog_detail() {
        let detail = build_catalog_detail(sample_pokemon(), &sample_species(), "en");

        assert_eq!(detail.entry.id, 25);
        assert_eq!(detail.genus, "Mouse Pokémon");
        assert!(detail.description.starts_with("When several of"));
    }

    #[test]
    fn test_stub_id() {
        let stub = ResourceStub {
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
        };
        assert_eq!(stub_id(&stub), "25");

        let stub = ResourceStub {
            name: "pikachu".to_string(),
            url: String::new(),
        };
        assert_eq!(stub_id(&stub), "pikachu");
    }

    #[test]
    fn test_matches_query() {
        let entry = make_entry(25, "pikachu", &["electric"]);

        assert!(matches_query(&entry, ""));
        assert!(matches_query(&entry, "pika"));
        assert!(matches_query(&entry, "PIKA"));
        assert!(matches_query(&entry, "25"));
        assert!(!matches_query(&entry, "2"));
        assert!(!matches_query(&entry, "char"));
    }

    #[test]
    fn test_matches_types() {
        let entry = make_entry(6, "charizard", &["fire", "flying"]);

        assert!(matches_types(&entry, &[]));
        assert!(matches_types(&entry, &["fire".to_string()]));
        assert!(matches_types(&entry, &["water".to_string(), "flying".to_string()]));
        assert!(!matches_types(&entry, &["water".to_string()]));
    }

    #[test]
    fn test_filter_entries_composes_both_filters() {
        let entries = vec![
            make_entry(25, "pikachu", &["electric"]),
            make_entry(26, "raichu", &["electric"]),
            make_entry(6, "charizard", &["fire", "flying"]),
        ];

        let filtered = filter_entries(entries.clone(), "chu", &["electric".to_string()]);
        assert_eq!(filtered.len(), 2);

        let filtered = filter_entries(entries.clone(), "chu", &["fire".to_string()]);
        assert!(filtered.is_empty());

        let filtered = filter_entries(entries, "", &[]);
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_calculate_pagination_basic() {
        assert_eq!(calculate_pagination(100, 1, 20), Ok((0, 20)));
        assert_eq!(calculate_pagination(100, 5, 20), Ok((80, 100)));
        assert_eq!(calculate_pagination(45, 3, 20), Ok((40, 45)));
    }

    #[test]
    fn test_calculate_pagination_out_of_range() {
        let err = calculate_pagination(100, 6, 20).unwrap_err();
        assert_eq!(err, "Page 6 is out of range. Only 5 pages available.");

        assert_eq!(
            calculate_pagination(100, 0, 20),
            Err(String::from("Page must be at least 1."))
        );
    }

    #[test]
    fn test_calculate_pagination_empty_total() {
        let err = calculate_pagination(0, 1, 20).unwrap_err();
        assert!(err.contains("No items available"));

        assert!(calculate_pagination(0, 5, 20).is_err());
    }

    #[test]
    fn test_page_offset_and_cursor_page_invert() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
        assert_eq!(cursor_page(0, 20), 1);
        assert_eq!(cursor_page(40, 20), 3);

        for page in 1..=12 {
            assert_eq!(cursor_page(page_offset(page, 20), 20), page);
        }
    }

    #[test]
    fn test_extract_offset() {
        assert_eq!(
            extract_offset("https://pokeapi.co/api/v2/pokemon?offset=20&limit=20"),
            Some(20)
        );
        assert_eq!(
            extract_offset("https://pokeapi.co/api/v2/pokemon?limit=20&offset=0"),
            Some(0)
        );
        assert_eq!(extract_offset("https://pokeapi.co/api/v2/pokemon?limit=20"), None);
    }

    #[test]
    fn test_build_page_info_nav_commands() {
        let info = build_page_info(1302, 1, 20);
        assert_eq!(info.total_pages, 66);
        assert_eq!(
            info.next_page_command.as_deref(),
            Some("pokepulse catalog list --page 2")
        );
        assert!(info.prev_page_command.is_none());

        let info = build_page_info(1302, 66, 20);
        assert!(info.next_page_command.is_none());
        assert_eq!(
            info.prev_page_command.as_deref(),
            Some("pokepulse catalog list --page 65")
        );

        // Non-default limits are carried through the navigation commands.
        let info = build_page_info(100, 2, 10);
        assert_eq!(
            info.next_page_command.as_deref(),
            Some("pokepulse catalog list --page 3 --limit 10")
        );
    }

    #[test]
    fn test_format_entry_id() {
        assert_eq!(format_entry_id(1), "#001");
        assert_eq!(format_entry_id(25), "#025");
        assert_eq!(format_entry_id(150), "#150");
        assert_eq!(format_entry_id(1000), "#1000");
    }

    #[test]
    fn test_format_height_and_weight() {
        assert_eq!(format_height(0.4), "0.4m");
        assert_eq!(format_height(1.0), "1.0m");
        assert_eq!(format_weight(6.0), "6.0kg");
        assert_eq!(format_weight(90.5), "90.5kg");
    }

    #[test]
    fn test_format_stat_name() {
        assert_eq!(format_stat_name("hp"), "HP");
        assert_eq!(format_stat_name("attack"), "Attack");
        assert_eq!(format_stat_name("defense"), "Defense");
        assert_eq!(format_stat_name("special-attack"), "Sp. Atk");
        assert_eq!(format_stat_name("special-defense"), "Sp. Def");
        assert_eq!(format_stat_name("speed"), "Speed");
        assert_eq!(format_stat_name("evasion"), "evasion");
    }

    #[test]
    fn test_format_ability() {
        assert_eq!(format_ability("static"), "static");
        assert_eq!(format_ability("lightning-rod"), "lightning rod");
    }

    #[test]
    fn test_stat_percent() {
        assert_eq!(stat_percent(0), 0.0);
        assert_eq!(stat_percent(255), 100.0);
        assert_eq!(stat_percent(510), 100.0);
        assert!((stat_percent(51) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }
}
