use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use phf_codegen::Map;
use regex::Regex;

include!("src/models/mod.rs");

const RESOURCES_FILE_NAME: &str = "compiled.gresources";
const UI_XML: &str = include_str!("resources/ui.xml");
const DATA_TOML: &str = include_str!("resources/data.toml");
const MANIFEST_TOML: &str = include_str!("Cargo.toml");
const RESOURCES_XML: &str = include_str!("resources/resources.gresource.xml.in");

// ===== TRAITS =====

trait StringExtensions {
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String>;
}

impl<T> StringExtensions for T
where
    T: AsRef<str>,
{
    fn replace_exactly(&self, from: &str, to: &str, count: usize) -> Result<String> {
        let text = self.as_ref();
        let actual_count = text.matches(from).count();

        if actual_count != count {
            bail!("Expected exactly {count} occurrence(s) of '{from}', found {actual_count}");
        }

        Ok(text.replace(from, to))
    }
}

// ===== BUILD CONFIGURATION =====

struct BuildConfiguration {
    output_dir: PathBuf,
    resources_dir: PathBuf,
    catalog_file: PathBuf,
    resources_xml_file: PathBuf,
    compiled_resources_file: PathBuf,
}

impl BuildConfiguration {
    fn new() -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let resources_dir = root.join("resources");
        let output_dir = PathBuf::from(std::env::var("OUT_DIR")?);
        let catalog_file = output_dir.join("catalog.rs");
        let resources_xml_file = output_dir.join("resources.xml");
        let compiled_resources_file = output_dir.join(RESOURCES_FILE_NAME);

        Ok(Self {
            output_dir,
            resources_dir,
            catalog_file,
            resources_xml_file,
            compiled_resources_file,
        })
    }
}

// ===== APPLICATION METADATA =====

#[allow(dead_code)]
struct ApplicationMetadata {
    name: &'static str,
    description: &'static str,
    version: &'static str,
    id: String,
    prefix: String,
    title: String,
}

impl ApplicationMetadata {
    fn extract_from_cargo() -> Result<Self> {
        let manifest: toml::Value =
            toml::from_str(MANIFEST_TOML).context("Failed to parse Cargo.toml")?;

        let metadata = manifest
            .get("package")
            .and_then(|package| package.get("metadata"))
            .context("Missing [package.metadata] section in Cargo.toml")?;

        Ok(Self {
            name: env!("CARGO_PKG_NAME"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            version: env!("CARGO_PKG_VERSION"),
            id: TomlReader::string(metadata, "id")?,
            prefix: TomlReader::string(metadata, "prefix")?,
            title: TomlReader::string(metadata, "title")?,
        })
    }
}

// ===== TOML READER =====

struct TomlReader;

impl TomlReader {
    fn string(value: &toml::Value, key: &str) -> Result<String> {
        value
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .context(format!("Key '{key}' is missing or not a string"))
    }

    fn boolean(value: &toml::Value, key: &str) -> Result<bool> {
        value
            .get(key)
            .and_then(toml::Value::as_bool)
            .context(format!("Key '{key}' is missing or not a boolean"))
    }

    fn integer(value: &toml::Value, key: &str) -> Result<i64> {
        value
            .get(key)
            .and_then(toml::Value::as_integer)
            .context(format!("Key '{key}' is missing or not an integer"))
    }

    fn float(value: &toml::Value, key: &str) -> Result<f64> {
        value
            .get(key)
            .and_then(toml::Value::as_float)
            .context(format!("Key '{key}' is missing or not a float"))
    }

    fn entries<'a>(value: &'a toml::Value, key: &str) -> Result<&'a [toml::Value]> {
        value
            .get(key)
            .and_then(toml::Value::as_array)
            .map(Vec::as_slice)
            .context(format!("Key '{key}' is missing or not an array"))
    }
}

// ===== DATASET =====

struct Dataset {
    info: Restaurant,
    categories: Vec<Category>,
    items: Vec<MenuItem>,
    reviews: Vec<Review>,
    offers: Vec<Offer>,
}

impl Dataset {
    fn parse() -> Result<Self> {
        let document: toml::Value =
            toml::from_str(DATA_TOML).context("Failed to parse resources/data.toml")?;

        let info = Self::parse_restaurant(&document)?;
        let (categories, items) = Self::parse_categories(&document)?;
        let reviews = Self::parse_reviews(&document)?;
        let offers = Self::parse_offers(&document)?;

        let dataset = Self {
            info,
            categories,
            items,
            reviews,
            offers,
        };
        dataset.validate()?;

        Ok(dataset)
    }

    fn parse_restaurant(document: &toml::Value) -> Result<Restaurant> {
        let table = document
            .get("restaurant")
            .context("Missing [restaurant] section")?;

        Ok(Restaurant {
            name: TomlReader::string(table, "name")?,
            tagline: TomlReader::string(table, "tagline")?,
            description: TomlReader::string(table, "description")?,
            address: TomlReader::string(table, "address")?,
            hours: TomlReader::string(table, "hours")?,
            opening_hour: TomlReader::integer(table, "opening-hour")? as u32,
            closing_hour: TomlReader::integer(table, "closing-hour")? as u32,
            phone: TomlReader::string(table, "phone")?,
            whatsapp: TomlReader::string(table, "whatsapp")?,
            zomato_url: TomlReader::string(table, "zomato-url")?,
            swiggy_url: TomlReader::string(table, "swiggy-url")?,
            latitude: TomlReader::float(table, "latitude")?,
            longitude: TomlReader::float(table, "longitude")?,
        })
    }

    fn parse_categories(document: &toml::Value) -> Result<(Vec<Category>, Vec<MenuItem>)> {
        let mut categories = Vec::new();
        let mut items = Vec::new();

        for entry in TomlReader::entries(document, "categories")? {
            let category = Category {
                slug: TomlReader::string(entry, "slug")?,
                name: TomlReader::string(entry, "name")?,
                icon: TomlReader::string(entry, "icon")?,
            };

            for item_entry in TomlReader::entries(entry, "items")? {
                items.push(Self::parse_item(item_entry, &category.slug)?);
            }

            categories.push(category);
        }

        Ok((categories, items))
    }

    fn parse_item(entry: &toml::Value, category_slug: &str) -> Result<MenuItem> {
        Ok(MenuItem {
            id: TomlReader::string(entry, "id")?,
            name: TomlReader::string(entry, "name")?,
            description: TomlReader::string(entry, "description")?,
            price: TomlReader::integer(entry, "price")? as u32,
            image: TomlReader::string(entry, "image")?,
            is_veg: TomlReader::boolean(entry, "veg")?,
            is_spicy: TomlReader::boolean(entry, "spicy")?,
            popular: TomlReader::boolean(entry, "popular")?,
            category: category_slug.to_string(),
        })
    }

    fn parse_reviews(document: &toml::Value) -> Result<Vec<Review>> {
        TomlReader::entries(document, "reviews")?
            .iter()
            .map(|entry| {
                Ok(Review {
                    name: TomlReader::string(entry, "name")?,
                    rating: TomlReader::integer(entry, "rating")? as u8,
                    comment: TomlReader::string(entry, "comment")?,
                    date: TomlReader::string(entry, "date")?,
                })
            })
            .collect()
    }

    fn parse_offers(document: &toml::Value) -> Result<Vec<Offer>> {
        TomlReader::entries(document, "offers")?
            .iter()
            .map(|entry| {
                Ok(Offer {
                    id: TomlReader::string(entry, "id")?,
                    title: TomlReader::string(entry, "title")?,
                    description: TomlReader::string(entry, "description")?,
                    discount: TomlReader::string(entry, "discount")?,
                    code: TomlReader::string(entry, "code")?,
                    valid_until: TomlReader::string(entry, "valid-until")?,
                    limited: TomlReader::boolean(entry, "limited")?,
                })
            })
            .collect()
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            bail!("Dataset must declare at least one category");
        }

        let mut seen_item_ids = HashSet::new();
        for item in &self.items {
            if !seen_item_ids.insert(item.id.as_str()) {
                bail!("Duplicate item id '{id}'", id = item.id);
            }
            if item.price == 0 {
                bail!("Item '{id}' must have a positive price", id = item.id);
            }
        }

        let mut seen_slugs = HashSet::new();
        for category in &self.categories {
            if !seen_slugs.insert(category.slug.as_str()) {
                bail!("Duplicate category slug '{slug}'", slug = category.slug);
            }
        }

        for review in &self.reviews {
            if !(1..=5).contains(&review.rating) {
                bail!(
                    "Review by '{name}' has rating {rating}, expected 1..=5",
                    name = review.name,
                    rating = review.rating
                );
            }
        }

        if self.info.opening_hour > 23 || self.info.closing_hour > 23 {
            bail!("Restaurant opening hours must fall within 0..=23");
        }

        if !self.info.whatsapp.chars().all(|c| c.is_ascii_digit()) {
            bail!("WhatsApp number must contain digits only");
        }

        Ok(())
    }
}

// ===== CATALOG INDEX MAPS =====

struct CatalogIndexMaps {
    category_slug_to_index: HashMap<String, usize>,
    item_id_to_index: HashMap<String, usize>,
    items_by_category_index: Vec<Vec<usize>>,
}

impl CatalogIndexMaps {
    fn build_from_dataset(dataset: &Dataset) -> Result<Self> {
        let category_slug_to_index: HashMap<String, usize> = dataset
            .categories
            .iter()
            .enumerate()
            .map(|(index, category)| (category.slug.clone(), index))
            .collect();

        let item_id_to_index: HashMap<String, usize> = dataset
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id.clone(), index))
            .collect();

        let mut items_by_category_index = vec![Vec::new(); dataset.categories.len()];
        for (item_index, item) in dataset.items.iter().enumerate() {
            let category_index = category_slug_to_index
                .get(&item.category)
                .copied()
                .context(format!(
                    "Item '{id}' references unknown category '{slug}'",
                    id = item.id,
                    slug = item.category
                ))?;
            items_by_category_index[category_index].push(item_index);
        }

        Ok(Self {
            category_slug_to_index,
            item_id_to_index,
            items_by_category_index,
        })
    }

    fn category_index(&self, slug: &str) -> usize {
        self.category_slug_to_index[slug]
    }
}

// ===== CATALOG CODE BUILDER =====

struct CatalogCodeBuilder;

impl CatalogCodeBuilder {
    fn format_phf_map<K: AsRef<str>>(map: &HashMap<K, usize>) -> String {
        let mut builder = Map::new();
        for (key, value) in map {
            builder.entry(key.as_ref(), value.to_string());
        }

        builder.build().to_string()
    }

    fn format_index_slices(slices: &[Vec<usize>]) -> String {
        let formatted = slices
            .iter()
            .map(|indices| format!("&{indices:?}"))
            .collect::<Vec<_>>()
            .join(", ");

        format!("&[{formatted}]")
    }

    fn format_restaurant(info: &Restaurant) -> String {
        format!(
            "Restaurant {{
                name: {name:?},
                tagline: {tagline:?},
                description: {description:?},
                address: {address:?},
                hours: {hours:?},
                opening_hour: {opening_hour},
                closing_hour: {closing_hour},
                phone: {phone:?},
                whatsapp: {whatsapp:?},
                zomato_url: {zomato_url:?},
                swiggy_url: {swiggy_url:?},
                latitude: {latitude:?},
                longitude: {longitude:?}
            }}",
            name = info.name,
            tagline = info.tagline,
            description = info.description,
            address = info.address,
            hours = info.hours,
            opening_hour = info.opening_hour,
            closing_hour = info.closing_hour,
            phone = info.phone,
            whatsapp = info.whatsapp,
            zomato_url = info.zomato_url,
            swiggy_url = info.swiggy_url,
            latitude = info.latitude,
            longitude = info.longitude,
        )
    }

    fn format_category(category: &Category) -> String {
        format!(
            "Category {{
                slug: {slug:?},
                name: {name:?},
                icon: {icon:?}
            }}",
            slug = category.slug,
            name = category.name,
            icon = category.icon,
        )
    }

    fn format_item(index_maps: &CatalogIndexMaps, item: &MenuItem) -> String {
        format!(
            "MenuItem {{
                id: {id:?},
                name: {name:?},
                description: {description:?},
                price: {price},
                image: {image:?},
                is_veg: {is_veg},
                is_spicy: {is_spicy},
                popular: {popular},
                category: {category}
            }}",
            id = item.id,
            name = item.name,
            description = item.description,
            price = item.price,
            image = item.image,
            is_veg = item.is_veg,
            is_spicy = item.is_spicy,
            popular = item.popular,
            category = index_maps.category_index(&item.category),
        )
    }

    fn format_review(review: &Review) -> String {
        format!(
            "Review {{
                name: {name:?},
                rating: {rating},
                comment: {comment:?},
                date: {date:?}
            }}",
            name = review.name,
            rating = review.rating,
            comment = review.comment,
            date = review.date,
        )
    }

    fn format_offer(offer: &Offer) -> String {
        format!(
            "Offer {{
                id: {id:?},
                title: {title:?},
                description: {description:?},
                discount: {discount:?},
                code: {code:?},
                valid_until: {valid_until:?},
                limited: {limited}
            }}",
            id = offer.id,
            title = offer.title,
            description = offer.description,
            discount = offer.discount,
            code = offer.code,
            valid_until = offer.valid_until,
            limited = offer.limited,
        )
    }

    fn format_struct_array<T>(entries: &[T], formatter: impl Fn(&T) -> String) -> String {
        entries.iter().map(formatter).collect::<Vec<_>>().join(", ")
    }

    fn build_catalog_code(dataset: &Dataset, index_maps: &CatalogIndexMaps) -> String {
        let info = Self::format_restaurant(&dataset.info);
        let categories = Self::format_struct_array(&dataset.categories, Self::format_category);
        let items =
            Self::format_struct_array(&dataset.items, |item| Self::format_item(index_maps, item));
        let reviews = Self::format_struct_array(&dataset.reviews, Self::format_review);
        let offers = Self::format_struct_array(&dataset.offers, Self::format_offer);
        let categories_map = Self::format_phf_map(&index_maps.category_slug_to_index);
        let items_map = Self::format_phf_map(&index_maps.item_id_to_index);
        let category_items = Self::format_index_slices(&index_maps.items_by_category_index);

        format!(
            "Catalog {{
                info: {info},
                categories: &[{categories}],
                items: &[{items}],
                reviews: &[{reviews}],
                offers: &[{offers}],
                categories_map: {categories_map},
                items_map: {items_map},
                category_items: {category_items}
            }}"
        )
    }
}

// ===== CATALOG PROCESSOR =====

struct CatalogProcessor<'a> {
    config: &'a BuildConfiguration,
}

impl<'a> CatalogProcessor<'a> {
    fn new(config: &'a BuildConfiguration) -> Self {
        Self { config }
    }

    fn process_catalog_data(&self) -> Result<()> {
        let dataset = Dataset::parse()?;
        let index_maps = CatalogIndexMaps::build_from_dataset(&dataset)?;
        let catalog_code = CatalogCodeBuilder::build_catalog_code(&dataset, &index_maps);

        std::fs::write(&self.config.catalog_file, catalog_code)
            .context("Failed to write catalog file")
    }
}

// ===== TEMPLATE SPLITTER =====

struct TemplateSplitter {
    templates: HashMap<String, String>,
}

impl TemplateSplitter {
    fn extract_from_ui_xml() -> Result<Self> {
        let template_regex = Regex::new(r#"(?s)<template\s+class="([^"]+)"[^>]*>.*?</template>"#)?;
        let mut templates = HashMap::new();

        for capture in template_regex.captures_iter(UI_XML) {
            let class_name = capture
                .get(1)
                .context("Template block without a class attribute")?
                .as_str();
            let file_name = heck::AsSnakeCase(class_name).to_string();
            let content = capture
                .get(0)
                .context("Template block without content")?
                .as_str()
                .to_string();
            templates.insert(file_name, content);
        }

        if templates.is_empty() {
            bail!("No <template> blocks found in resources/ui.xml");
        }

        Ok(Self { templates })
    }

    fn write_template_files(&self, output_dir: &Path) -> Result<&Self> {
        for (file_name, content) in &self.templates {
            let file_path = output_dir.join(format!("{file_name}.ui"));
            let document = format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>{content}</interface>"
            );
            std::fs::write(file_path, document)?;
        }

        Ok(self)
    }

    fn build_resource_entries(&self) -> String {
        let mut file_names: Vec<_> = self.templates.keys().collect();
        file_names.sort();

        file_names
            .into_iter()
            .map(|file_name| {
                format!("<file compressed=\"true\" alias=\"{file_name}.ui\">{file_name}.ui</file>")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ===== RESOURCE COMPILER =====

struct ResourceCompiler<'a> {
    config: &'a BuildConfiguration,
    app_prefix: &'a str,
    template_entries: &'a str,
}

impl<'a> ResourceCompiler<'a> {
    fn new(config: &'a BuildConfiguration, app_prefix: &'a str, template_entries: &'a str) -> Self {
        Self {
            config,
            app_prefix,
            template_entries,
        }
    }

    fn compile_resources(&self) -> Result<()> {
        let final_xml = RESOURCES_XML
            .replace_exactly("@APP_TEMPLATES@", self.template_entries, 1)?
            .replace_exactly("@APP_PREFIX@", self.app_prefix, 1)?;

        std::fs::write(&self.config.resources_xml_file, &final_xml)?;

        glib_build_tools::compile_resources(
            &[&self.config.output_dir, &self.config.resources_dir],
            self.config
                .resources_xml_file
                .to_str()
                .context("Invalid XML path")?,
            self.config
                .compiled_resources_file
                .to_str()
                .context("Invalid compiled file path")?,
        );

        Ok(())
    }
}

// ===== CARGO ENVIRONMENT =====

struct CargoEnvironment;

impl CargoEnvironment {
    fn emit_build_configuration_flags() {
        println!("cargo:rustc-check-cfg=cfg(runtime)");
        println!("cargo:rustc-cfg=runtime");
        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=resources");
        println!("cargo:rerun-if-changed=src/models");
    }

    fn emit_application_metadata(metadata: &ApplicationMetadata, resources_path: &Path) {
        println!("cargo:rustc-env=APP_NAME={}", metadata.name);
        println!("cargo:rustc-env=APP_DESCRIPTION={}", metadata.description);
        println!("cargo:rustc-env=APP_VERSION={}", metadata.version);
        println!("cargo:rustc-env=APP_ID={}", metadata.id);
        println!("cargo:rustc-env=APP_PREFIX={}", metadata.prefix);
        println!("cargo:rustc-env=APP_TITLE={}", metadata.title);
        println!("cargo:rustc-env=APP_RESOURCES={}", resources_path.display());
    }
}

// ===== MAIN =====

fn main() -> Result<()> {
    CargoEnvironment::emit_build_configuration_flags();

    let config = BuildConfiguration::new()?;
    let metadata = ApplicationMetadata::extract_from_cargo()?;

    CatalogProcessor::new(&config).process_catalog_data()?;

    let splitter = TemplateSplitter::extract_from_ui_xml()?;
    splitter.write_template_files(&config.output_dir)?;
    let template_entries = splitter.build_resource_entries();

    ResourceCompiler::new(&config, &metadata.prefix, &template_entries).compile_resources()?;

    CargoEnvironment::emit_application_metadata(&metadata, &config.compiled_resources_file);

    Ok(())
}
