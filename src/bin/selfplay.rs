//! AI 同士の自動対局。`--verbose` で思考ログを出力する。

use structopt::StructOpt;

use minishogi::*;

#[derive(Debug, StructOpt)]
struct Opt {
    /// 探索深さ。省略時は既定値を使う。
    #[structopt(long)]
    depth: Option<u32>,

    /// 思考ログを出力する。
    #[structopt(long)]
    verbose: bool,

    /// 最大手数。終局しない場合はこの手数で打ち切る。
    #[structopt(long, default_value = "200")]
    max_ply: u32,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let level = if opt.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    };
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(level)
        .chain(std::io::stdout())
        .apply()?;

    let depth = opt.depth.unwrap_or(DEFAULT_DEPTH);
    let mut pos = Position::startpos();

    while pos.winner().is_none() && pos.ply() <= opt.max_ply {
        let side = pos.side_to_move();

        let mv = match search_best_move(&pos, depth) {
            Some(mv) => mv,
            None => {
                // 指せる手がなければ対局は進行しない。
                println!("{}に指せる手がないため打ち切ります", side);
                break;
            }
        };

        let ply = pos.ply();
        let record = pos.do_move(mv);

        println!("{:3} 手目 {} {}", ply, side, record);
    }

    println!();
    println!("{}", pos);

    match pos.winner() {
        Some(winner) => println!("{}の勝ちです", winner),
        None => println!("終局せず ({} 手で打ち切り)", pos.ply() - 1),
    }

    Ok(())
}
