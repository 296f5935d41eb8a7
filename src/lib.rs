mod batch;
mod config;
mod curie;
mod error;
mod format;
mod identity;
mod labels;
mod lookup;
mod progress;
mod record;
mod score;
mod transform;
mod util;
mod writer;

mod pipeline;

pub use crate::config::{CompilerOptions, OutputMode};
pub use crate::error::CompileError;
pub use crate::pipeline::{CompileStats, SemsimCompiler};

pub use crate::curie::{CurieContext, MAX_CURIE_LEN};
pub use crate::labels::{sanitize_label, MAX_LABEL_LEN};
pub use crate::record::{SimilarityRecord, NUMERIC_COLUMNS, RECOGNIZED_COLUMNS};
pub use crate::score::resolve_score;
pub use crate::transform::{MappingRow, RowTransformer, DEFAULT_THRESHOLD_COLUMN};

// Building blocks, exposed so driver code can assemble its own loop.
pub use crate::batch::{BatchReader, DEFAULT_BATCH_SIZE};
pub use crate::format::render_batch;
pub use crate::identity::{identity_rows, ROOT_TERM};
pub use crate::lookup::{TermEntry, TermLookup};
pub use crate::writer::StreamingWriter;

// Progress helpers and robust file ops for binaries.
pub use crate::progress::{estimated_total_rows, make_count_progress};
pub use crate::util::{
    create_with_backoff, open_with_backoff, remove_with_backoff, replace_file_atomic_backoff,
};
