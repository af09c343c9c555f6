use log::{trace, warn};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::sync::{oneshot, Mutex};


/// Longest answer kept, in bytes. The rest of a longer line is skipped.
pub const MAX_ANSWER_LEN: u64 = 4096;

/// Source of submitted answers, one line per answer.
///
/// Lines read ahead by the buffer are kept for later requests, so a whole transcript
/// piped in at once is still consumed one answer at a time.
pub struct AnswerInput<R> {
    reader: Arc<Mutex<BufReader<R>>>,
}

impl<R> AnswerInput<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    pub fn new(reader: R) -> Self {
        AnswerInput {
            reader: Arc::new(Mutex::new(BufReader::new(reader))),
        }
    }

    /// Starts reading the next answer in the background and returns the channel it
    /// will be handed over on. End of input is handed over as a blank answer.
    pub fn request(&self) -> oneshot::Receiver<io::Result<String>> {
        let (sender, receiver) = oneshot::channel();
        let reader = Arc::clone(&self.reader);
        tokio::spawn(async move {
            let answer = read_answer(&mut *reader.lock().await).await;
            if sender.send(answer).is_err() {
                trace!("Answer arrived after its question was abandoned");
            }
        });
        receiver
    }
}

/// Reads one line. Bytes that are not UTF-8 are replaced rather than rejected, so
/// they simply make a wrong answer.
async fn read_answer<B>(reader: &mut B) -> io::Result<String>
where
    B: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    (&mut *reader)
        .take(MAX_ANSWER_LEN)
        .read_until(b'\n', &mut line)
        .await?;

    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    } else if line.len() as u64 == MAX_ANSWER_LEN {
        warn!("Answer longer than {} bytes was truncated", MAX_ANSWER_LEN);
        skip_line(reader).await?;
    }

    Ok(String::from_utf8_lossy(&line).into_owned())
}

async fn skip_line<B>(reader: &mut B) -> io::Result<()>
where
    B: AsyncBufRead + Unpin,
{
    loop {
        let (consumed, found_newline) = {
            let buffer = reader.fill_buf().await?;
            if buffer.is_empty() {
                return Ok(());
            }
            match buffer.iter().position(|b| *b == b'\n') {
                Some(position) => (position + 1, true),
                None => (buffer.len(), false),
            }
        };
        reader.consume(consumed);
        if found_newline {
            return Ok(());
        }
    }
}
