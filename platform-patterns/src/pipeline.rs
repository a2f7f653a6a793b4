//! The guided input pipeline.
//!
//! Asks for each field of an entry in turn, validates the answer before
//! moving on, and appends the finished entry to the dataset. Any error ends
//! the run; nothing is written until every field has been collected.

use std::future::Future;
use std::io::Write;

use tracing::{info, warn};

use crate::catalog::lines_for_station;
use crate::config::{ColorPolicy, Config};
use crate::dataset::Dataset;
use crate::domain::{
    Color, Entry, ImageRef, ImageSource, LineSelection, PaletteColor, Station, ValidationError,
    dedup_colors, parse_commons_filename, parse_first_hex_color, parse_flickr_image_id,
    parse_flickr_user, parse_image_url, parse_next_hex_color, parse_palette_selection,
};
use crate::error::Error;
use crate::lookup::{Backend, DEFAULT_IDENTIFIER, Lookup, MockLookup, VbbClient};
use crate::prompt::{Choice, Prompter, TerminalPrompter};
use crate::resolver::StationResolver;

/// Drives the prompts for one entry.
pub struct Pipeline<'a, L: Lookup, P: Prompter> {
    lookup: &'a L,
    prompter: &'a mut P,
    resolver: StationResolver<'a, L>,
    color_policy: ColorPolicy,
}

impl<'a, L: Lookup, P: Prompter> Pipeline<'a, L, P> {
    /// Create a new pipeline.
    pub fn new(lookup: &'a L, prompter: &'a mut P, color_policy: ColorPolicy) -> Self {
        Self::with_identifier(lookup, prompter, color_policy, DEFAULT_IDENTIFIER)
    }

    /// Create a new pipeline with a custom lookup caller identifier.
    pub fn with_identifier(
        lookup: &'a L,
        prompter: &'a mut P,
        color_policy: ColorPolicy,
        identifier: &str,
    ) -> Self {
        Self {
            lookup,
            prompter,
            resolver: StationResolver::new(lookup, identifier),
            color_policy,
        }
    }

    /// Collect a complete entry, then append it to `dataset` and echo it.
    ///
    /// Writes `Appended to <file>` and the exact JSON line to `out`.
    pub async fn record<W: Write>(
        &mut self,
        dataset: &Dataset,
        out: &mut W,
    ) -> Result<Entry, Error> {
        let entry = self.collect().await?;
        let line = dataset.append(&entry)?;
        info!(path = %dataset.path().display(), "entry appended");

        writeln!(out, "Appended to {}", dataset.path().display()).map_err(Error::Terminal)?;
        out.write_all(line.as_bytes()).map_err(Error::Terminal)?;
        Ok(entry)
    }

    /// Ask for every field and build the entry.
    pub async fn collect(&mut self) -> Result<Entry, Error> {
        let station = self
            .station("Station?")
            .await?
            .ok_or(ValidationError::NoStation)?;
        info!(id = %station.id, name = %station.name, "station");

        let lines = self.lines(&station).await?;
        info!(?lines, "lines");

        let previous_station = self.station("Previous station (can be empty)?").await?;
        let next_station = self.station("Next station (can be empty)?").await?;

        let colors = match self.color_policy {
            ColorPolicy::Palette => self.palette_colors().await?,
            ColorPolicy::Hex => self.hex_colors().await?,
        };
        info!(colors = colors.len(), "colors");

        let image = self.image().await?;

        Ok(Entry::build(
            station,
            lines,
            previous_station,
            next_station,
            colors,
            image,
        ))
    }

    async fn station(&mut self, message: &str) -> Result<Option<Station>, Error> {
        let raw = self.prompter.autocomplete(message, &self.resolver).await?;
        self.resolver.resolve(&raw).await
    }

    async fn lines(&mut self, station: &Station) -> Result<Vec<String>, Error> {
        let lines = lines_for_station(self.lookup, &station.id).await?;
        let choices: Vec<Choice> = lines
            .iter()
            .map(|l| Choice::new(&l.name, &l.name).with_color(l.color))
            .collect();

        let selection = self
            .prompter
            .multiselect("Lines (multiple selections allowed)?", &choices)
            .await?;
        Ok(selection.into_iter().collect::<LineSelection>().validate()?)
    }

    async fn palette_colors(&mut self) -> Result<Vec<Color>, Error> {
        let choices: Vec<Choice> = PaletteColor::ALL
            .iter()
            .map(|c| Choice::new(c.name(), c.name()).with_color(c.hex()))
            .collect();

        let selection = self
            .prompter
            .multiselect("Pattern colors (multiple selections allowed)?", &choices)
            .await?;
        Ok(parse_palette_selection(&selection.selected())?)
    }

    async fn hex_colors(&mut self) -> Result<Vec<Color>, Error> {
        let first = self
            .prompter
            .text("Main pattern color (hex)?")
            .await?;
        let mut colors = vec![parse_first_hex_color(&first)?];

        loop {
            let raw = self
                .prompter
                .text("Next pattern color (hex, empty to finish)?")
                .await?;
            match parse_next_hex_color(&raw)? {
                Some(color) => colors.push(color),
                None => break,
            }
        }

        Ok(dedup_colors(colors))
    }

    async fn image(&mut self) -> Result<Option<ImageRef>, Error> {
        let choices: Vec<Choice> = ImageSource::ALL
            .iter()
            .map(|s| Choice::new(s.name(), s.label()))
            .collect();
        let picked = self
            .prompter
            .select("Pattern image source?", &choices)
            .await?;

        let image = match ImageSource::parse(&picked)? {
            ImageSource::None => None,
            ImageSource::Url => {
                let raw = self
                    .prompter
                    .text("Pattern image URL (can be empty)?")
                    .await?;
                parse_image_url(&raw)?
            }
            ImageSource::Commons => {
                let raw = self.prompter.text("Commons filename?").await?;
                Some(parse_commons_filename(&raw)?)
            }
            ImageSource::Flickr => {
                let user = self.prompter.text("Flickr user?").await?;
                let user = parse_flickr_user(&user)?;
                let id = self.prompter.text("Flickr image id?").await?;
                let image_id = parse_flickr_image_id(&id)?;
                Some(ImageRef::Flickr { user, image_id })
            }
        };
        Ok(image)
    }
}

/// Run `work` to completion unless `interrupt` finishes first, which aborts.
/// A pending interrupt wins over work that is ready on the same poll.
///
/// The dataset append is synchronous, so cancelling `work` either writes the
/// whole entry or nothing.
pub async fn abort_on<T>(
    work: impl Future<Output = Result<T, Error>>,
    interrupt: impl Future<Output = ()>,
) -> Result<T, Error> {
    tokio::select! {
        biased;
        () = interrupt => {
            info!("interrupted");
            Err(Error::Aborted)
        }
        result = work => result,
    }
}

/// Resolves on the first Ctrl+C. Never resolves if the handler cannot be
/// installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

/// Record one entry interactively on the terminal, as configured.
///
/// Ctrl+C at any point, during a prompt or a lookup, aborts the run.
pub async fn run(config: &Config) -> Result<Entry, Error> {
    let backend = match &config.mock_data {
        Some(path) => {
            info!(path = %path.display(), "using mock lookup data");
            Backend::Mock(MockLookup::from_file(path)?)
        }
        None => Backend::Vbb(VbbClient::new(config.lookup.clone())?),
    };
    let dataset = Dataset::new(&config.datafile);
    let mut prompter = TerminalPrompter::stdio();
    let mut stdout = std::io::stdout();

    let mut pipeline = Pipeline::with_identifier(
        &backend,
        &mut prompter,
        config.color_policy,
        &config.lookup.identifier,
    );
    abort_on(pipeline.record(&dataset, &mut stdout), ctrl_c()).await
}
