use serde::Serialize;

// ═══════════════════════════════════════════════════════════════
//  Fixed field values
// ═══════════════════════════════════════════════════════════════

// Every field below is constant across all generated records; only the
// identity and the last-modified millisecond suffix vary.
const DOCUMENT_TYPE: &str = "addressDeclaration";
const PLACEHOLDER_GUID: &str = "RANDOM_GUID";
const ADDRESS_LINE: &str = "AddressLine";
const POSTCODE: &str = "SM5 2LE";
const EFFECTIVE_DATE_TYPE: &str = "SPECIFIC_EFFECTIVE_DATE";
const EFFECTIVE_DATE: u32 = 20150320;
const CREATED_DATE_TIME: &str = "2015-03-20T12:23:25.183Z";
const VERSION: u32 = 2;

// ═══════════════════════════════════════════════════════════════
//  Record shape
// ═══════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct RecordId {
    id: String,
}

#[derive(Serialize)]
struct AddressLineTag {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct EffectiveDate {
    #[serde(rename = "type")]
    kind: &'static str,
    date: u32,
    #[serde(rename = "knownDate")]
    known_date: u32,
}

#[derive(Serialize)]
struct MongoDate {
    #[serde(rename = "$date")]
    date: String,
}

/// One synthetic change-log document. Serialized field order is the
/// declaration order and is part of the fixture contract.
#[derive(Serialize)]
pub struct Record {
    #[serde(rename = "_id")]
    id: RecordId,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "contractId")]
    contract_id: &'static str,
    #[serde(rename = "addressNumber")]
    address_number: AddressLineTag,
    #[serde(rename = "townCity")]
    town_city: AddressLineTag,
    postcode: &'static str,
    #[serde(rename = "processId")]
    process_id: &'static str,
    #[serde(rename = "effectiveDate")]
    effective_date: EffectiveDate,
    #[serde(rename = "paymentEffectiveDate")]
    payment_effective_date: EffectiveDate,
    #[serde(rename = "createdDateTime")]
    created_date_time: MongoDate,
    #[serde(rename = "_version")]
    version: u32,
    #[serde(rename = "_lastModifiedDateTime")]
    last_modified_date_time: MongoDate,
}

impl Record {
    pub fn new(database: &str, collection: &str, batch_index: usize, record_index: usize) -> Self {
        Self {
            id: RecordId {
                id: format!("{database}/{collection}/{batch_index}/{record_index}"),
            },
            kind: DOCUMENT_TYPE,
            contract_id: PLACEHOLDER_GUID,
            address_number: AddressLineTag { kind: ADDRESS_LINE },
            town_city: AddressLineTag { kind: ADDRESS_LINE },
            postcode: POSTCODE,
            process_id: PLACEHOLDER_GUID,
            effective_date: effective_date(),
            payment_effective_date: effective_date(),
            created_date_time: MongoDate {
                date: CREATED_DATE_TIME.to_string(),
            },
            version: VERSION,
            // Indexes >= 1000 widen past three digits rather than wrap.
            last_modified_date_time: MongoDate {
                date: format!("2018-12-01T15:01:02.{record_index:03}Z"),
            },
        }
    }
}

fn effective_date() -> EffectiveDate {
    EffectiveDate {
        kind: EFFECTIVE_DATE_TYPE,
        date: EFFECTIVE_DATE,
        known_date: EFFECTIVE_DATE,
    }
}

/// Newline-joined batch body: `records` JSON objects in ascending
/// record-index order, no trailing newline.
pub fn batch_contents(
    database: &str,
    collection: &str,
    batch_index: usize,
    records: usize,
) -> Result<String, serde_json::Error> {
    let lines = (0..records)
        .map(|record_index| {
            serde_json::to_string(&Record::new(database, collection, batch_index, record_index))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
