use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Dataset file read when no path is given.
pub const DEFAULT_PATH: &str = "sex_bmi_smokers.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr)]
pub enum Sex {
    #[display("male")]
    Male,
    #[display("female")]
    Female,
}

impl Sex {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::FromStr)]
pub enum Smoker {
    #[display("yes")]
    Yes,
    #[display("no")]
    No,
}

impl Smoker {
    pub const ALL: [Self; 2] = [Self::Yes, Self::No];
}

/// One row of the dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiRecord {
    pub sex: Sex,
    pub smoker: Smoker,
    pub bmi: f64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to read dataset: {source}")]
    Io { source: io::Error },
    #[display("dataset has no header line")]
    MissingHeader,
    #[display("dataset has no '{column}' column")]
    MissingColumn { column: &'static str },
    #[display("line {line}: missing '{column}' field")]
    MissingField { line: usize, column: &'static str },
    #[display("line {line}: invalid {column} value '{value}'")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
}

impl From<io::Error> for LoadError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

/// Opens and parses the dataset at `path`.
pub fn load<P>(path: P) -> Result<Vec<BmiRecord>, LoadError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

/// Parses a header-led CSV dataset.
///
/// Columns are located by header name, so their order does not matter and
/// extra columns are ignored. Blank lines are skipped. Fields may be quoted.
///
/// Line numbers in errors are 1-based and count the header.
pub fn read_csv<R>(reader: R) -> Result<Vec<BmiRecord>, LoadError>
where
    R: BufRead,
{
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|line| (i + 1, line)));

    let header = loop {
        match lines.next() {
            Some(line) => {
                let (_, line) = line?;
                if !line.trim().is_empty() {
                    break split_fields(&line);
                }
            }
            None => return Err(LoadError::MissingHeader),
        }
    };
    let column_index = |column: &'static str| {
        header
            .iter()
            .position(|name| name.trim().eq_ignore_ascii_case(column))
            .ok_or(LoadError::MissingColumn { column })
    };
    let sex_idx = column_index("sex")?;
    let smoker_idx = column_index("smoker")?;
    let bmi_idx = column_index("bmi")?;

    let mut records = vec![];
    for line in lines {
        let (line_no, line) = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(&line);
        let field = |idx: usize, column: &'static str| {
            fields
                .get(idx)
                .map(|value| value.trim())
                .ok_or(LoadError::MissingField {
                    line: line_no,
                    column,
                })
        };
        let invalid = |column: &'static str, value: &str| LoadError::InvalidValue {
            line: line_no,
            column,
            value: value.to_owned(),
        };

        let sex = field(sex_idx, "sex")?;
        let smoker = field(smoker_idx, "smoker")?;
        let bmi = field(bmi_idx, "bmi")?;
        records.push(BmiRecord {
            sex: sex.parse().map_err(|_| invalid("sex", sex))?,
            smoker: smoker.parse().map_err(|_| invalid("smoker", smoker))?,
            bmi: bmi
                .parse::<f64>()
                .ok()
                .filter(|bmi| bmi.is_finite())
                .ok_or_else(|| invalid("bmi", bmi))?,
        });
    }
    Ok(records)
}

/// Splits one CSV line into fields, honouring double-quoted fields and `""` escapes.
fn split_fields(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            ('"', _) => in_quotes = !in_quotes,
            (',', false) => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
