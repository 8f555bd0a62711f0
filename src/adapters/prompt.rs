use crate::domain::ports::Prompter;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin};

/// Boxed prompt sink so stdout and stderr share one prompter type.
pub type PromptWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// Line-oriented prompter: prints the question, then reads one line of input.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[async_trait]
impl<R, W> Prompter for LinePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.flush().await?;

        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf).await?;
        if read == 0 {
            tracing::debug!("Input closed while asking: {}", question.trim_end());
            return Ok(None);
        }

        // Stray non-UTF-8 bytes become U+FFFD instead of ending the session.
        let line = String::from_utf8_lossy(&buf);
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }
}

/// Reads answers from stdin. Questions go to stderr when `prompts_to_stderr`
/// is set, which keeps stdout free for JSON output.
pub fn stdio_prompter(prompts_to_stderr: bool) -> LinePrompter<BufReader<Stdin>, PromptWriter> {
    let writer: PromptWriter = if prompts_to_stderr {
        Box::new(tokio::io::stderr())
    } else {
        Box::new(tokio::io::stdout())
    };
    LinePrompter::new(BufReader::new(tokio::io::stdin()), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::io::Builder;

    #[tokio::test]
    async fn test_ask_writes_question_and_reads_line() {
        let input = Builder::new().read(b"42\r\n").build();
        let mut prompter = LinePrompter::new(BufReader::new(input), Vec::new());

        let answer = prompter.ask("ID: ").await.unwrap();
        assert_eq!(answer.as_deref(), Some("42"));

        let (_, written) = prompter.into_inner();
        assert_eq!(written, b"ID: ");
    }

    #[tokio::test]
    async fn test_ask_keeps_inner_whitespace() {
        let input = Builder::new().read(b"Ana Maria \n").build();
        let mut prompter = LinePrompter::new(BufReader::new(input), Vec::new());
        assert_eq!(
            prompter.ask("Name: ").await.unwrap().as_deref(),
            Some("Ana Maria ")
        );
    }

    #[tokio::test]
    async fn test_ask_returns_none_at_end_of_input() {
        let input = Builder::new().read(b"1\n").build();
        let mut prompter = LinePrompter::new(BufReader::new(input), Vec::new());
        assert_eq!(prompter.ask("> ").await.unwrap().as_deref(), Some("1"));
        assert_eq!(prompter.ask("> ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_fatal() {
        let input = Builder::new().read(b"An\xffa\n").read(b"20\n").build();
        let mut prompter = LinePrompter::new(BufReader::new(input), Vec::new());

        let name = prompter.ask("Name: ").await.unwrap();
        assert_eq!(name.as_deref(), Some("An\u{FFFD}a"));
        assert_eq!(prompter.ask("Age: ").await.unwrap().as_deref(), Some("20"));
    }

    #[tokio::test]
    async fn test_empty_line_is_an_answer() {
        let input = Builder::new().read(b"\n").build();
        let mut prompter = LinePrompter::new(BufReader::new(input), Vec::new());
        assert_eq!(prompter.ask("> ").await.unwrap().as_deref(), Some(""));
    }
}
