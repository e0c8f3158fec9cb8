//! Player input background task

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{debug, error, warn};

use crate::game::PlayerCommand;

/// Read commands from stdin, one per line
pub async fn stdin_commands_task(commands: mpsc::Sender<PlayerCommand>) {
    read_commands_task(BufReader::new(tokio::io::stdin()), commands).await;
}

/// Parse commands from any line source and forward them to the driver.
///
/// Stops at end of input, on a read error, or once the driver is gone.
pub async fn read_commands_task<R>(reader: R, commands: mpsc::Sender<PlayerCommand>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<PlayerCommand>() {
                    Ok(command) => {
                        if commands.send(command).await.is_err() {
                            debug!("Turn driver gone, stopping input");
                            break;
                        }
                    }
                    Err(e) => warn!("{}", e),
                }
            }
            Ok(None) => {
                debug!("Input closed");
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_skips_blank_and_unknown_lines() {
        let input: &[u8] = b"hint\n\n   \nbogus\no\nquit\n";
        let (tx, mut rx) = mpsc::channel(8);

        read_commands_task(input, tx).await;

        let mut received = Vec::new();
        while let Some(command) = rx.recv().await {
            received.push(command);
        }
        assert_eq!(
            received,
            vec![
                PlayerCommand::Hint,
                PlayerCommand::Answer { correct: true },
                PlayerCommand::Quit,
            ]
        );
    }
}
