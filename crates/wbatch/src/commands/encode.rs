use std::io::Write;

use crate::{
    corpus_args::{CorpusArgs, Split},
    input_output::OutputArgs,
    logging::LogArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    /// The split to encode.
    #[arg(long, default_value = "train")]
    split: Split,

    /// Ids per output line.
    #[arg(long, default_value = "32")]
    line_width: usize,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let (corpus, ids) = self.corpus.load_split(self.split)?;
        log::info!("Vocabulary Size: {}", corpus.vocab_size);

        let unknown = ids.iter().filter(|&&id| id == 0).count();
        if unknown > 0 {
            log::warn!("{unknown} unknown words in {:?} split", self.split);
        }

        let mut writer = self.output.open_writer()?;
        for chunk in ids.chunks(self.line_width.max(1)) {
            write_ids(&mut writer, chunk)?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Write one space-separated line of ids.
pub fn write_ids<W: Write>(
    writer: &mut W,
    ids: &[u32],
) -> std::io::Result<()> {
    let mut first = true;
    for id in ids {
        if !first {
            write!(writer, " ")?;
        }
        write!(writer, "{id}")?;
        first = false;
    }
    writeln!(writer)
}
