use std::io::Write;

use wordbatch::vocab::{WordVocab, build_vocab_path, io::write_text_vocab};

use crate::{
    corpus_args::{CorpusArgs, Split},
    input_output::OutputArgs,
    logging::LogArgs,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let path = self
            .corpus
            .options(Split::Train)
            .train_path(&self.corpus.data_dir);
        log::info!("Building vocabulary from {}", path.display());

        let vocab: WordVocab<u32> = build_vocab_path(&path)?;
        log::info!("Vocabulary Size: {}", vocab.vocab_size());

        let mut writer = self.output.open_writer()?;
        write_text_vocab(&vocab, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
