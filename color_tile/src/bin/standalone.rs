use color_tile::{ColorTile, Command};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let tile = ColorTile::new();
    let mut redraws = tile.subscribe();

    // Redraw task: prints the tile every time the state changes.
    let painter = tokio::spawn(async move {
        while redraws.changed().await.is_ok() {
            let state = *redraws.borrow_and_update();
            println!("redraw {state}");
        }
    });

    // Default window canvas.
    tile.resize(1000, 700);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !tile.apply(command) {
                    break;
                }
            }
            Err(e) => eprintln!("{e}"),
        }
    }

    // Dropping the tile closes the channel and ends the redraw task.
    drop(tile);
    painter.await?;
    Ok(())
}
