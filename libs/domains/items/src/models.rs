use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::policy::AGGREGATE_PRICE_LIMIT;

/// Item classification codes known to the catalog
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ItemGroup {
    #[strum(serialize = "CD-A01")]
    #[serde(rename = "CD-A01")]
    Stationery,
    #[strum(serialize = "CD-A02")]
    #[serde(rename = "CD-A02")]
    Other,
}

impl ItemGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ItemGroup::Stationery => "Stationery",
            ItemGroup::Other => "Other",
        }
    }

    /// Display label for a raw group code; `None` for unknown or empty codes.
    pub fn label_for(code: &str) -> Option<&'static str> {
        code.parse::<ItemGroup>().ok().map(|group| group.label())
    }

    pub fn options() -> Vec<GroupOption> {
        ItemGroup::iter()
            .map(|group| GroupOption {
                code: group.to_string(),
                label: group.label().to_string(),
            })
            .collect()
    }
}

/// Code/label pair for group pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupOption {
    pub code: String,
    pub label: String,
}

/// A catalog record as persisted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Caller-supplied unique key
    pub id: i32,
    pub item_name: String,
    /// Optional; passed to the store exactly as given
    pub price: Option<i32>,
    /// Classification code, e.g. `CD-A01`
    pub group_id: String,
    pub regist_date: NaiveDate,
    /// Optimistic-concurrency version, owned by the store
    pub version_no: i32,
}

impl Item {
    /// New, never-persisted item (`version_no` 0)
    pub fn new(
        id: i32,
        item_name: impl Into<String>,
        price: Option<i32>,
        group_id: impl Into<String>,
        regist_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            item_name: item_name.into(),
            price,
            group_id: group_id.into(),
            regist_date,
            version_no: 0,
        }
    }
}

const REGIST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Registration input as submitted by a client
///
/// `regist_date` stays a string until conversion so a malformed date is
/// reported next to the other field errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_stationery_price", skip_on_field_errors = false))]
pub struct ItemForm {
    #[validate(required)]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 10))]
    pub item_name: String,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(length(min = 1, max = 6))]
    pub group_id: String,
    /// ISO date, `YYYY-MM-DD`
    #[validate(required, custom(function = "validate_regist_date"))]
    #[schema(format = Date, example = "2023-10-01")]
    pub regist_date: Option<String>,
}

fn parse_regist_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, REGIST_DATE_FORMAT).ok()
}

fn validate_regist_date(value: &str) -> Result<(), ValidationError> {
    if parse_regist_date(value).is_none() {
        let mut error = ValidationError::new("date");
        error.message = Some("must be a date in YYYY-MM-DD format".into());
        return Err(error);
    }
    Ok(())
}

/// Single-item counterpart of the aggregate rule: one stationery item may not
/// be priced at the limit on its own.
fn validate_stationery_price(form: &ItemForm) -> Result<(), ValidationError> {
    let is_stationery = matches!(form.group_id.parse::<ItemGroup>(), Ok(ItemGroup::Stationery));
    let price = i64::from(form.price.unwrap_or(0));

    if is_stationery && price >= AGGREGATE_PRICE_LIMIT {
        let mut error = ValidationError::new("stationery_price");
        error.message = Some(
            format!("stationery items must be priced below {}", AGGREGATE_PRICE_LIMIT).into(),
        );
        return Err(error);
    }
    Ok(())
}

impl TryFrom<ItemForm> for Item {
    type Error = ValidationErrors;

    fn try_from(form: ItemForm) -> Result<Self, Self::Error> {
        let regist_date = form.regist_date.as_deref().and_then(parse_regist_date);
        match (form.id, regist_date) {
            (Some(id), Some(regist_date)) => Ok(Item::new(
                id,
                form.item_name,
                form.price,
                form.group_id,
                regist_date,
            )),
            (id, regist_date) => {
                let mut errors = ValidationErrors::new();
                if id.is_none() {
                    errors.add("id", ValidationError::new("required"));
                }
                if regist_date.is_none() {
                    let code = if form.regist_date.is_some() { "date" } else { "required" };
                    errors.add("regist_date", ValidationError::new(code));
                }
                Err(errors)
            }
        }
    }
}

/// Validated form echoed back before the client commits a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemConfirmation {
    #[serde(flatten)]
    pub form: ItemForm,
    /// Label of `group_id`, absent for unknown codes
    pub group_name: Option<String>,
}

impl From<ItemForm> for ItemConfirmation {
    fn from(form: ItemForm) -> Self {
        let group_name = ItemGroup::label_for(&form.group_id).map(str::to_string);
        Self { form, group_name }
    }
}

fn default_page_size() -> NonZeroU32 {
    NonZeroU32::new(5).unwrap_or(NonZeroU32::MIN)
}

/// Search query parameters
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemSearchForm {
    /// Substring of the item name; empty means no filter
    #[validate(length(max = 10))]
    pub item_name: Option<String>,
    /// Exact price
    #[validate(range(min = 0, max = 10000))]
    pub price: Option<i32>,
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Page size, at least 1
    #[serde(default = "default_page_size")]
    #[param(value_type = u32, minimum = 1)]
    pub size: NonZeroU32,
}

impl Default for ItemSearchForm {
    fn default() -> Self {
        Self {
            item_name: None,
            price: None,
            page: 0,
            size: default_page_size(),
        }
    }
}

/// Page window of a search: zero-based page number and a non-zero size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub number: u32,
    pub size: NonZeroU32,
}

impl PageRequest {
    pub fn new(number: u32, size: NonZeroU32) -> Self {
        Self { number, size }
    }

    /// `None` when `size` is zero
    pub fn of(number: u32, size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(|size| Self::new(number, size))
    }

    /// Number of rows preceding this page
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size.get())
    }
}

/// Filter plus page window. The same value is used for counting and fetching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemSearchCriteria {
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub page: PageRequest,
}

impl ItemSearchCriteria {
    pub fn new(item_name: Option<String>, price: Option<i32>, page: PageRequest) -> Self {
        Self {
            item_name,
            price,
            page,
        }
    }
}

impl From<ItemSearchForm> for ItemSearchCriteria {
    fn from(form: ItemSearchForm) -> Self {
        let item_name = form.item_name.filter(|name| !name.trim().is_empty());
        Self::new(item_name, form.price, PageRequest::new(form.page, form.size))
    }
}

/// One page of a search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: &PageRequest, total_elements: u64) -> Self {
        let page_size = page.size.get();
        Self {
            content,
            page_number: page.number,
            page_size,
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(page_size)),
        }
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) + 1 < self.total_pages
    }
}
