use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// The three monetary columns of a disbursement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonetaryColumn {
    Agency,
    Unit,
    Institutional,
}

impl MonetaryColumn {
    pub const ALL: [MonetaryColumn; 3] = [
        MonetaryColumn::Agency,
        MonetaryColumn::Unit,
        MonetaryColumn::Institutional,
    ];

    /// Column name as it appears in the source JSON.
    pub fn header(self) -> &'static str {
        match self {
            MonetaryColumn::Agency => "Valor agência",
            MonetaryColumn::Unit => "Valor unidade",
            MonetaryColumn::Institutional => "Valor IA-UPE",
        }
    }

    /// Key used for this column in an [`AnnualSummary`].
    pub fn summary_key(self) -> &'static str {
        match self {
            MonetaryColumn::Agency => "agencia",
            MonetaryColumn::Unit => "unidade",
            MonetaryColumn::Institutional => "ia_upe",
        }
    }
}

/// A monetary cell as it arrives from the source: either a JSON number or
/// a localized string such as `"1.234.567,89"`.
#[derive(Debug, Clone, PartialEq)]
pub enum MonetaryValue {
    /// A JSON number, kept as written: `100` and `100.0` render differently
    /// when a mixed column is read back as text.
    Numeric(Number),
    Text(String),
}

impl MonetaryValue {
    /// Numeric cell holding `v`. Infinite and NaN amounts are stored as 0.0.
    pub fn numeric(v: f64) -> Self {
        let v = if v.is_finite() { v } else { 0.0 };
        MonetaryValue::Numeric(Number::from_f64(v).unwrap_or_else(|| Number::from(0)))
    }

    /// Numeric reading of the cell. Text goes through the lenient Brazilian
    /// decimal parser, so this never fails.
    pub fn as_f64(&self) -> f64 {
        match self {
            MonetaryValue::Numeric(n) => n.as_f64().unwrap_or(0.0),
            MonetaryValue::Text(s) => crate::utils::brazilian_format::parse_decimal_lenient(s),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, MonetaryValue::Numeric(_))
    }
}

// Booleans, arrays and objects in a monetary column are kept as their JSON
// text; the normalizer turns them into 0.0 later instead of failing the load.
impl<'de> Deserialize<'de> for MonetaryValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => MonetaryValue::Numeric(n),
            Value::String(s) => MonetaryValue::Text(s),
            other => MonetaryValue::Text(other.to_string()),
        })
    }
}

impl Serialize for MonetaryValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MonetaryValue::Numeric(n) => n.serialize(serializer),
            MonetaryValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// One disbursement entry of the source file.
///
/// The derived date columns are filled in by the date normalizer and are
/// never read from or written to JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Data publicação", default)]
    pub publication_date: Option<Value>,
    #[serde(rename = "Valor agência", default)]
    pub agency_value: Option<MonetaryValue>,
    #[serde(rename = "Valor unidade", default)]
    pub unit_value: Option<MonetaryValue>,
    #[serde(rename = "Valor IA-UPE", default)]
    pub institutional_value: Option<MonetaryValue>,

    /// Every other field of the source object, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    #[serde(skip)]
    pub published_on: Option<NaiveDate>,
    #[serde(skip)]
    pub year: Option<i32>,
    #[serde(skip)]
    pub month: Option<u32>,
    #[serde(skip)]
    pub month_label: Option<String>,
}

impl Record {
    pub fn value(&self, column: MonetaryColumn) -> Option<&MonetaryValue> {
        match column {
            MonetaryColumn::Agency => self.agency_value.as_ref(),
            MonetaryColumn::Unit => self.unit_value.as_ref(),
            MonetaryColumn::Institutional => self.institutional_value.as_ref(),
        }
    }

    pub fn value_mut(&mut self, column: MonetaryColumn) -> &mut Option<MonetaryValue> {
        match column {
            MonetaryColumn::Agency => &mut self.agency_value,
            MonetaryColumn::Unit => &mut self.unit_value,
            MonetaryColumn::Institutional => &mut self.institutional_value,
        }
    }

    /// Amount held in `column`, with missing cells read as zero.
    pub fn amount(&self, column: MonetaryColumn) -> f64 {
        self.value(column).map_or(0.0, MonetaryValue::as_f64)
    }
}

/// Per-month totals of one year. Always produced in sets of 12.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    #[serde(rename = "Mes")]
    pub month: u32,
    #[serde(rename = "MesNome")]
    pub month_label: String,
    #[serde(rename = "Valor agência")]
    pub agency: f64,
    #[serde(rename = "Valor unidade")]
    pub unit: f64,
    #[serde(rename = "Valor IA-UPE")]
    pub institutional: f64,
}

impl MonthlyRow {
    pub fn empty(month: u32, month_label: String) -> Self {
        MonthlyRow {
            month,
            month_label,
            agency: 0.0,
            unit: 0.0,
            institutional: 0.0,
        }
    }

    pub fn amount(&self, column: MonetaryColumn) -> f64 {
        match column {
            MonetaryColumn::Agency => self.agency,
            MonetaryColumn::Unit => self.unit,
            MonetaryColumn::Institutional => self.institutional,
        }
    }

    pub fn add(&mut self, column: MonetaryColumn, amount: f64) {
        match column {
            MonetaryColumn::Agency => self.agency += amount,
            MonetaryColumn::Unit => self.unit += amount,
            MonetaryColumn::Institutional => self.institutional += amount,
        }
    }
}

/// Yearly totals shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub agencia: f64,
    pub unidade: f64,
    pub ia_upe: f64,
}

impl AnnualSummary {
    pub fn get(&self, column: MonetaryColumn) -> f64 {
        match column {
            MonetaryColumn::Agency => self.agencia,
            MonetaryColumn::Unit => self.unidade,
            MonetaryColumn::Institutional => self.ia_upe,
        }
    }

    pub fn add(&mut self, column: MonetaryColumn, amount: f64) {
        match column {
            MonetaryColumn::Agency => self.agencia += amount,
            MonetaryColumn::Unit => self.unidade += amount,
            MonetaryColumn::Institutional => self.ia_upe += amount,
        }
    }

    pub fn total(&self) -> f64 {
        self.agencia + self.unidade + self.ia_upe
    }
}

/// Everything the monthly-total page shows for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearReport {
    pub year: i32,
    pub months: Vec<MonthlyRow>,
    pub summary: AnnualSummary,
}

/// One row of a comparative table, e.g. the totals of a single project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Value of the grouping field; `None` for records that lack it.
    pub key: Option<String>,
    pub records: usize,
    pub totals: AnnualSummary,
}
