use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::constants::BUFFER_SIZE;
use crate::error::DatasetError;
use super::dataset::Dataset;
use super::builder::DatasetBuilder;

/// A struct that reads a CSV file into [`Dataset`].
///
/// Every column must parse as `f64`
/// except the ones declared by [`DatasetReader::nominal_features`],
/// which are label-encoded.
///
/// # Example
/// ```no_run
/// use id3split::DatasetReader;
/// let dataset = DatasetReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .nominal_features(["outlook", "windy"])
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
    nominal: Vec<String>,
}

impl<P, S> Default for DatasetReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
            nominal: Vec::new(),
        }
    }
}

impl<P, S> DatasetReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    /// Without header, the columns are named
    /// `Feat. [1]`, `Feat. [2]`, ...
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Declare the columns that hold categories.
    pub fn nominal_features<I, T>(mut self, columns: I) -> Self
        where I: IntoIterator<Item = T>,
              T: ToString,
    {
        self.nominal.extend(columns.into_iter().map(|c| c.to_string()));
        self
    }
}

impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}

impl<P, S> DatasetReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for class labels.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }

    /// Reads CSV lines from `reader`.
    pub fn read_from<R: BufRead>(&self, reader: R)
        -> Result<Dataset, DatasetError>
    {
        let target = self.target.as_ref()
            .ok_or(DatasetError::MissingTarget)?;
        let target = target.as_ref();

        let mut names: Vec<String> = Vec::new();
        let mut cells: Vec<Vec<String>> = Vec::new();
        let mut line_numbers = Vec::new();
        let mut lines = reader.lines().enumerate();

        if self.has_header {
            if let Some((_, line)) = lines.next() {
                names = line?.split(',')
                    .map(|x| x.trim().to_string())
                    .collect();
            }
        }

        for (i, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let row = line.split(',')
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            // If the header does not exist,
            // construct a dummy header.
            if names.is_empty() {
                names = (1..=row.len())
                    .map(|j| format!("Feat. [{j}]"))
                    .collect();
            }
            if cells.is_empty() {
                cells = vec![Vec::with_capacity(BUFFER_SIZE); names.len()];
            }

            if row.len() != names.len() {
                return Err(DatasetError::RaggedLine {
                    line: i + 1,
                    expected: names.len(),
                    got: row.len(),
                });
            }
            for (column, x) in cells.iter_mut().zip(row) {
                column.push(x);
            }
            line_numbers.push(i + 1);
        }

        if cells.is_empty() { return Err(DatasetError::Empty); }

        for name in self.nominal.iter().map(String::as_str).chain([target]) {
            if !names.iter().any(|n| n == name) {
                return Err(DatasetError::UnknownColumn(name.to_string()));
            }
        }

        let mut builder = DatasetBuilder::new();
        for (name, column) in names.into_iter().zip(cells) {
            if let Some(row) = column.iter().position(String::is_empty) {
                return Err(DatasetError::MissingValue { column: name, row });
            }

            if name == target {
                builder = builder.target(column);
            } else if self.nominal.contains(&name) {
                builder = builder.nominal(name, column);
            } else {
                let vals = column.iter()
                    .enumerate()
                    .map(|(row, x)| {
                        x.parse::<f64>()
                            .map_err(|_| DatasetError::Parse {
                                line: line_numbers[row],
                                column: name.clone(),
                                value: x.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                builder = builder.numerical(name, vals);
            }
        }
        builder.build()
    }
}

impl<P, S> DatasetReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `Result<Dataset, DatasetError>`.
    pub fn read(self) -> Result<Dataset, DatasetError> {
        let file = self.file.as_ref()
            .ok_or(DatasetError::MissingFile)?;
        let file = File::open(file)?;
        self.read_from(BufReader::new(file))
    }
}
