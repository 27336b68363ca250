use wick::{
    candles_from_records, csv_to_records, is_traffic_light_pair, line_slope, sma, sma_slope,
};

const CSV: &str = "time,open,high,low,close,volume
2024-03-01T10:00,100.0,101.5,99.2,101.0,1200
2024-03-01T10:05,101.0,102.3,100.6,102.1,900
2024-03-01T10:10,102.1,102.4,100.9,101.2,1500
2024-03-01T10:15,101.2,103.0,101.0,102.8,1100
2024-03-01T10:20,102.8,104.1,102.5,103.9,1300";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = csv_to_records(CSV, &["t", "o", "h", "l", "c", "v"]);
    let candles = candles_from_records(&records)?;
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    println!("sma(3):       {:?}", sma(&closes, 3));
    println!("sma slope(4): {}", sma_slope(&closes, 4)?);
    println!("line slope:   {:?}", line_slope(&candles, 5.0));

    for pair in candles.windows(2) {
        if is_traffic_light_pair(&pair[0], &pair[1]) {
            println!(
                "color flip at {}",
                pair[1].ts.as_deref().unwrap_or("<no timestamp>")
            );
        }
    }
    Ok(())
}
