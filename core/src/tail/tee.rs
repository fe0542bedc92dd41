use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use super::LineTail;

/// Bytes of a single line kept in the tail. Thirty clipped lines still fit in
/// one Slack message; the echo always carries the full line.
pub const MAX_LINE_BYTES: usize = 1024;

const CLIP_MARKER: char = '\u{2026}';

/// Drains `source` to EOF, echoing each line to `echo` and returning the last
/// `limit` lines, oldest first.
///
/// A read error ends the capture early with whatever was buffered. A failing
/// echo destination is abandoned but the source is still drained, so the
/// writing process never stalls on a full pipe.
pub async fn capture<R, W>(source: R, mut echo: W, limit: usize, stream: &'static str) -> Vec<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(source);
    let mut tail = LineTail::new(limit);
    let mut buf = Vec::with_capacity(256);
    let mut echo_open = true;
    let mut seen = 0u64;
    let mut clipped = 0u64;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = trim_line_ending(&buf);
                if echo_open {
                    if let Err(e) = echo_line(&mut echo, line).await {
                        tracing::warn!(
                            target: "boom.tail",
                            stream,
                            error = %e,
                            "echo destination failed, continuing capture without pass-through"
                        );
                        echo_open = false;
                    }
                }
                let (kept, was_clipped) = clip(String::from_utf8_lossy(line).into_owned());
                if was_clipped {
                    if clipped == 0 {
                        tracing::info!(
                            target: "boom.tail",
                            stream,
                            max_bytes = MAX_LINE_BYTES,
                            "clipping long lines kept for the report"
                        );
                    }
                    clipped += 1;
                }
                tail.push(kept);
                seen += 1;
            }
            Err(e) => {
                tracing::warn!(
                    target: "boom.tail",
                    stream,
                    error = %e,
                    "read failed, keeping partial tail"
                );
                break;
            }
        }
    }

    tracing::debug!(target: "boom.tail", stream, lines = seen, clipped, kept = tail.len(), "stream drained");
    tail.into_lines()
}

async fn echo_line<W: AsyncWrite + Unpin>(echo: &mut W, line: &[u8]) -> std::io::Result<()> {
    echo.write_all(line).await?;
    echo.write_all(b"\n").await?;
    echo.flush().await
}

fn clip(mut line: String) -> (String, bool) {
    if line.len() <= MAX_LINE_BYTES {
        return (line, false);
    }
    let mut end = MAX_LINE_BYTES;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
    line.push(CLIP_MARKER);
    (line, true)
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}
