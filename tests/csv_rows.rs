use dcflow::{Channel, NamedNetwork, RawDataCenter};

const DATA_CENTERS: &str = "\
id,max_in,max_out
syd,5,5
mel,3,3
bne,3,3
per,5,5
";

const CHANNELS: &str = "\
from,to,capacity
syd,mel,3
syd,bne,2
mel,per,3
bne,per,2
";

fn read(data_centers: &str, channels: &str) -> Result<NamedNetwork<String, i64>, String> {
    let mut network = NamedNetwork::new();
    let mut rdr = csv::Reader::from_reader(data_centers.as_bytes());
    for row in rdr.deserialize() {
        let row: RawDataCenter<String, i64> = row.map_err(|e| e.to_string())?;
        let (id, dc) = row.validate().map_err(|e| e.to_string())?;
        network.add_data_center(id, dc).map_err(|e| e.to_string())?;
    }
    let mut rdr = csv::Reader::from_reader(channels.as_bytes());
    for row in rdr.deserialize() {
        let channel: Channel<String, i64> = row.map_err(|e| e.to_string())?;
        network.add_channel(channel);
    }
    Ok(network)
}

#[test]
fn solves_a_network_read_from_csv() {
    let network = read(DATA_CENTERS, CHANNELS).unwrap();
    assert_eq!(network.len(), 4);
    assert_eq!(network.solve(&"syd".to_string(), &["per".to_string()]), Ok(5));
}

#[test]
fn negative_bandwidth_is_rejected_while_parsing() {
    let channels = "from,to,capacity\nsyd,mel,-3\n";
    let err = read(DATA_CENTERS, channels).unwrap_err();
    assert!(err.contains("non-negative"), "{err}");
}

#[test]
fn negative_limits_are_rejected() {
    let data_centers = "id,max_in,max_out\nsyd,-1,5\n";
    let err = read(data_centers, CHANNELS).unwrap_err();
    assert!(err.contains("non-negative"), "{err}");
}

#[test]
fn duplicate_ids_are_rejected() {
    let data_centers = "id,max_in,max_out\nsyd,1,5\nsyd,2,2\n";
    let err = read(data_centers, CHANNELS).unwrap_err();
    assert_eq!(err, "Data center \"syd\" is defined more than once");
}
