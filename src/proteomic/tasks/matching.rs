use std::io::prelude::*;
use std::io;
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use log::{debug, info, warn};
use threadpool::ThreadPool;

use crate::proteomic::error::MatchError;
use crate::proteomic::models::database::Database;
use crate::proteomic::models::match_mode::MatchMode;
use crate::proteomic::models::match_result::MatchRow;
use crate::proteomic::models::protein_occurrence::ProteinLocalization;
use crate::proteomic::models::query_peptide::QueryPeptide;
use crate::proteomic::tasks::localization::{self, ProteinSource};
use crate::proteomic::tasks::report_rejected;
use crate::proteomic::utility::{aggregator, config, database_loader, matcher, normalizer, query_reader, result_writer};

pub struct MatchingArguments {
    query_file: String,
    database_dir: String,
    mode: MatchMode,
    protein_source: Option<ProteinSource>,
    output_file: Option<String>,
    locations_output_file: Option<String>,
    thread_count: usize,
    absent_marker: String
}

impl MatchingArguments {
    pub fn get_query_file(&self) -> &str {
        return self.query_file.as_str();
    }

    pub fn get_database_dir(&self) -> &str {
        return self.database_dir.as_str();
    }

    pub fn get_mode(&self) -> MatchMode {
        return self.mode;
    }

    pub fn get_protein_source(&self) -> Option<&ProteinSource> {
        return self.protein_source.as_ref();
    }

    pub fn get_output_file(&self) -> Option<&str> {
        return self.output_file.as_ref().map(|path| path.as_str());
    }

    pub fn get_locations_output_file(&self) -> Option<&str> {
        return self.locations_output_file.as_ref().map(|path| path.as_str());
    }

    pub fn get_thread_count(&self) -> usize {
        return self.thread_count;
    }

    pub fn get_absent_marker(&self) -> &str {
        return self.absent_marker.as_str();
    }

    pub fn from_cli_args(cli_args: &clap::ArgMatches) -> Result<Self, MatchError> {
        let query_file: &str = match cli_args.value_of("QUERY_FILE") {
            Some(file) => file,
            None => return Err(MatchError::InvalidArgument("no query file specified".to_owned()))
        };
        let database_dir: String = match config::resolve(cli_args.value_of("DATABASE_DIR"), config::DATABASE_DIR_ENV) {
            Some(directory) => directory,
            None => {
                debug!("no database directory specified, using {}", config::DEFAULT_DATABASE_DIR);
                config::DEFAULT_DATABASE_DIR.to_owned()
            }
        };
        let mode: MatchMode = match cli_args.value_of("MATCH_MODE") {
            Some(mode) => mode.parse::<MatchMode>()?,
            None => MatchMode::Exact
        };
        let thread_count: usize = config::resolve_thread_count(
            config::resolve(cli_args.value_of("THREAD_COUNT"), config::THREAD_COUNT_ENV)
        )?;
        return Ok(Self {
            query_file: query_file.to_owned(),
            database_dir: database_dir,
            mode: mode,
            protein_source: ProteinSource::from_cli_args(cli_args),
            output_file: cli_args.value_of("OUTPUT_FILE").map(|path| path.to_owned()),
            locations_output_file: cli_args.value_of("LOCATIONS_OUTPUT_FILE").map(|path| path.to_owned()),
            thread_count: thread_count,
            absent_marker: cli_args.value_of("ABSENT_MARKER").unwrap_or(result_writer::DEFAULT_ABSENT_MARKER).to_owned()
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    query_count: usize,
    rejected_count: usize,
    matched_count: usize,
    // None if no protein was searched
    occurrence_count: Option<usize>
}

impl MatchSummary {
    pub fn get_query_count(&self) -> usize {
        return self.query_count;
    }

    pub fn get_rejected_count(&self) -> usize {
        return self.rejected_count;
    }

    pub fn get_matched_count(&self) -> usize {
        return self.matched_count;
    }

    pub fn get_occurrence_count(&self) -> Option<usize> {
        return self.occurrence_count;
    }

    pub fn to_string(&self) -> String {
        let mut summary = format!("{} queries, {} skipped, {} matched", self.query_count, self.rejected_count, self.matched_count);
        if let Some(occurrence_count) = self.occurrence_count {
            summary.push_str(format!(", {} protein occurrences", occurrence_count).as_str());
        }
        return summary;
    }
}

/// Matches and aggregates every query. Rows are returned in query order, whatever the thread count.
pub fn match_batch(queries: &[QueryPeptide], database: Arc<Database>, mode: MatchMode, thread_count: usize) -> Result<Vec<MatchRow>, MatchError> {
    if thread_count < 2 || queries.len() < 2 {
        return Ok(queries.iter()
            .map(|query| aggregator::aggregate(&matcher::match_query(query.get_sequence(), &database, mode)))
            .collect());
    }
    let thread_pool = ThreadPool::new(thread_count);
    let (sender, receiver) = mpsc::channel::<(usize, MatchRow)>();
    for (idx, query) in queries.iter().enumerate() {
        // clone pointers for thread
        let database_ptr = database.clone();
        let sender_ptr = sender.clone();
        let sequence = query.get_sequence().to_owned();
        thread_pool.execute(move || {
            let row = aggregator::aggregate(&matcher::match_query(&sequence, &database_ptr, mode));
            // the receiver outlives all jobs, a failed send can only follow a panic on the receiving side
            sender_ptr.send((idx, row)).ok();
        });
    }
    // receiver.iter() ends once every job dropped its sender
    drop(sender);
    let mut rows: Vec<Option<MatchRow>> = vec![None; queries.len()];
    for (idx, row) in receiver.iter() {
        rows[idx] = Some(row);
    }
    if thread_pool.panic_count() > 0 {
        return Err(MatchError::Worker(format!("{} matching jobs panicked", thread_pool.panic_count())));
    }
    return rows.into_iter()
        .enumerate()
        .map(|(idx, row)| match row {
            Some(row) => Ok(row),
            None => Err(MatchError::Worker(format!("no result for query {}", idx + 1)))
        })
        .collect();
}

pub fn match_task(matching_arguments: &MatchingArguments) -> Result<MatchSummary, MatchError> {
    let start_time: f64 = time::precise_time_s();
    let raw_queries = query_reader::read_queries(Path::new(matching_arguments.get_query_file()))?;
    let batch = normalizer::normalize_all(&raw_queries);
    report_rejected(&batch);

    // without database the session ends here, before anything is written
    let database = Arc::new(database_loader::load_directory(Path::new(matching_arguments.get_database_dir()))?);
    if database.is_empty() {
        warn!("database in '{}' contains no peptides", matching_arguments.get_database_dir());
    }

    info!("matching {} queries in {} mode with {} threads", batch.get_accepted().len(), matching_arguments.get_mode(), matching_arguments.get_thread_count());
    let rows = match_batch(batch.get_accepted(), database, matching_arguments.get_mode(), matching_arguments.get_thread_count())?;
    let output = result_writer::open_output(matching_arguments.get_output_file())?;
    result_writer::write_match_rows(output, &rows, matching_arguments.get_absent_marker())?;

    let mut occurrence_count: Option<usize> = None;
    if let Some(protein_source) = matching_arguments.get_protein_source() {
        let protein = protein_source.load()?;
        match localization::localize(&batch.accepted_sequences(), protein.as_ref()) {
            ProteinLocalization::NoProteinSupplied => warn!("protein sequence is empty, localization skipped"),
            located @ ProteinLocalization::Located(_) => {
                let occurrences = located.occurrences();
                // both tables on stdout are separated by an empty line
                if matching_arguments.get_output_file().is_none() && matching_arguments.get_locations_output_file().is_none() {
                    writeln!(io::stdout())?;
                }
                let output = result_writer::open_output(matching_arguments.get_locations_output_file())?;
                result_writer::write_occurrences(output, &occurrences)?;
                occurrence_count = Some(occurrences.len());
            }
        }
    }

    let summary = MatchSummary {
        query_count: batch.get_accepted().len(),
        rejected_count: batch.get_rejected().len(),
        matched_count: rows.iter().filter(|row| row.is_match()).count(),
        occurrence_count: occurrence_count
    };
    info!("matching finished in {:.3} s", time::precise_time_s() - start_time);
    return Ok(summary);
}
