//! 人間と AI が対局するシェル。

use anyhow::{ensure, Context as _};
use clap::arg_enum;
use structopt::StructOpt;

use minishogi::*;

arg_enum! {
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    enum AiSide {
        Sente,
        Gote,
    }
}

impl AiSide {
    fn to_side(self) -> Side {
        match self {
            Self::Sente => SENTE,
            Self::Gote => GOTE,
        }
    }
}

#[derive(Debug, StructOpt)]
struct Opt {
    /// AI が受け持つ陣営。
    #[structopt(long, possible_values = &AiSide::variants(), case_insensitive = true, default_value = "Gote")]
    ai: AiSide,

    /// 探索深さ。省略時は既定値を使う。
    #[structopt(long)]
    depth: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let depth = opt.depth.unwrap_or(DEFAULT_DEPTH);
    let mut game = Game::new(opt.ai.to_side(), depth);

    game.run()
}

#[derive(Debug)]
struct Game {
    pos: Position,
    ai_side: Side,
    depth: u32,
}

impl Game {
    fn new(ai_side: Side, depth: u32) -> Self {
        Self {
            pos: Position::startpos(),
            ai_side,
            depth,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        println!("=== 5五将棋 ===");

        loop {
            println!();
            println!("{}", self.pos);

            if let Some(winner) = self.pos.winner() {
                println!("{}の勝ちです", winner);
                break;
            }

            if self.pos.side_to_move() == self.ai_side {
                self.step_ai()?;
            } else if let Err(e) = self.step_human() {
                // 無効な入力、非合法手は致命的ではない。やり直させる。
                println!("error: {}", e);
            }
        }

        Ok(())
    }

    /// AI の手番を 1 手進める。
    fn step_ai(&mut self) -> anyhow::Result<()> {
        println!("AI が考えています...");

        let mv = search_best_move(&self.pos, self.depth).context("AI に指せる手がない")?;
        let record = self.pos.do_move(mv);

        println!("AI: {}", record);

        Ok(())
    }

    /// 人間の手番を 1 手進める。
    fn step_human(&mut self) -> anyhow::Result<()> {
        println!("移動: 5133 のように入力 (５一から３三へ)");
        println!("駒打ち: s42 のように入力 (p=歩, s=銀, g=金, b=角, r=飛)");

        let line = prompt("入力: ")?;
        let mut mv = parse_move(&line)?;

        let mvs = generate_moves(&self.pos);

        // 成りを選択できる手なら、成るかどうかを確認した上で判定する。
        // パーサは成りフラグを立てないので、成りの解決はここでのみ行われる。
        if mvs.contains(&mv) && can_choose_promotion(&self.pos, mv) {
            let answer = prompt("成りますか? (y/n): ")?;
            if answer == "y" {
                mv = Move::new_walk_promotion(mv.src(), mv.dst());
            }
        }

        ensure!(mvs.contains(&mv), "その手は指せません");

        let record = self.pos.do_move(mv);

        println!("{}", record);

        Ok(())
    }
}

/// 入力された不成の指し手に対して成りを選択できるかどうかを返す。
fn can_choose_promotion(pos: &Position, mv: Move) -> bool {
    if mv.is_drop() || mv.is_promotion() {
        return false;
    }

    let pc = pos.board()[mv.src()];

    pc != NO_PIECE && pc.is_promotable() && mv.dst().is_promotion_zone(pc.side())
}

fn prompt(msg: &str) -> anyhow::Result<String> {
    use std::io::Write as _;

    print!("{}", msg);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let n = std::io::stdin().read_line(&mut line)?;
    ensure!(n > 0, "入力が閉じられた");

    Ok(line.trim().to_owned())
}
