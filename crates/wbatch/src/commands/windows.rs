use std::io::Write;

use wordbatch::WindowOptions;

use crate::{
    commands::encode::write_ids,
    corpus_args::{CorpusArgs, Split},
    input_output::OutputArgs,
    logging::LogArgs,
};

/// Args for the windows command.
#[derive(clap::Args, Debug)]
pub struct WindowsArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    /// The split to window.
    #[arg(long, default_value = "train")]
    split: Split,

    /// The number of parallel streams.
    #[arg(long, default_value = "20")]
    batch_size: usize,

    /// The unroll length.
    #[arg(long, default_value = "35")]
    num_steps: usize,

    /// Print every pair instead of one summary line per pair.
    #[arg(long)]
    full: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl WindowsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let (_, ids) = self.corpus.load_split(self.split)?;

        let options = WindowOptions::new(self.batch_size, self.num_steps);
        let iter = options.windows(&ids)?;
        log::info!(
            "batch_size={}, num_steps={}, batch_len={}, epoch_size={}",
            self.batch_size,
            self.num_steps,
            iter.data().ncols(),
            iter.epoch_size(),
        );

        let mut writer = self.output.open_writer()?;
        for (step, pair) in iter.enumerate() {
            if self.full {
                writeln!(writer, "# step {step}")?;
                for (x_row, y_row) in pair.x.rows().into_iter().zip(pair.y.rows()) {
                    write!(writer, "x: ")?;
                    write_ids(&mut writer, &x_row.to_vec())?;
                    write!(writer, "y: ")?;
                    write_ids(&mut writer, &y_row.to_vec())?;
                }
            } else {
                let (rows, cols) = pair.x.dim();
                writeln!(
                    writer,
                    "{step}\t{rows}x{cols}\tx[0,0]={}\ty[0,0]={}",
                    pair.x[[0, 0]],
                    pair.y[[0, 0]],
                )?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
