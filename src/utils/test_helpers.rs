pub mod test_data {
    use std::{
        fs::{self, File},
        path::{Path, PathBuf},
        sync::Arc,
    };

    use arrow::{
        array::{Float64Array, Int64Array, RecordBatch, StringArray},
        datatypes::{DataType, Field, Schema, SchemaRef},
        json::LineDelimitedWriter,
    };
    use parquet::arrow::ArrowWriter;

    pub fn people_schema() -> SchemaRef {
        Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("score", DataType::Float64, true),
        ]))
    }

    /// Rows `start..start + count`; every id divisible by three has no score.
    pub fn people_batch(schema: &SchemaRef, start: i64, count: i64) -> RecordBatch {
        let ids: Vec<i64> = (start..start + count).collect();
        let names: Vec<String> = ids.iter().map(|id| format!("person_{id}")).collect();
        #[allow(clippy::cast_precision_loss)]
        let scores: Vec<Option<f64>> = ids
            .iter()
            .map(|id| (id % 3 != 0).then(|| *id as f64 * 1.5))
            .collect();

        RecordBatch::try_new(
            Arc::clone(schema),
            vec![
                Arc::new(Int64Array::from(ids)),
                Arc::new(StringArray::from(names)),
                Arc::new(Float64Array::from(scores)),
            ],
        )
        .unwrap()
    }

    /// One row whose name is `len` copies of 'x'.
    pub fn long_text_batch(schema: &SchemaRef, len: usize) -> RecordBatch {
        RecordBatch::try_new(
            Arc::clone(schema),
            vec![
                Arc::new(Int64Array::from(vec![0])),
                Arc::new(StringArray::from(vec!["x".repeat(len)])),
                Arc::new(Float64Array::from(vec![Some(1.0)])),
            ],
        )
        .unwrap()
    }

    /// Column names that need exact, quoted references.
    pub fn mixed_case_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("UserId", DataType::Int64, false),
            Field::new("Full Name", DataType::Utf8, true),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(StringArray::from(vec![Some("Ada"), None])),
            ],
        )
        .unwrap()
    }

    pub fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Small CSV with a numeric, a text and a float column.
    pub fn write_people_csv(dir: &Path, name: &str, rows: i64) -> PathBuf {
        let mut contents = String::from("id,name,score\n");
        for id in 0..rows {
            if id % 3 == 0 {
                contents.push_str(&format!("{id},person_{id},\n"));
            } else {
                #[allow(clippy::cast_precision_loss)]
                let score = id as f64 * 1.5;
                contents.push_str(&format!("{id},person_{id},{score:?}\n"));
            }
        }
        write_text(dir, name, &contents)
    }

    pub fn write_parquet_file(path: &Path, schema: &SchemaRef, batches: Vec<RecordBatch>) {
        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, Arc::clone(schema), None).unwrap();
        for batch in batches {
            writer.write(&batch).unwrap();
        }
        writer.close().unwrap();
    }

    pub fn write_ndjson_file(path: &Path, batches: Vec<RecordBatch>) {
        let file = File::create(path).unwrap();
        let mut writer = LineDelimitedWriter::new(file);
        for batch in &batches {
            writer.write(batch).unwrap();
        }
        writer.finish().unwrap();
    }
}

pub mod verify {
    use std::{fs::File, path::Path};

    use anyhow::Result;
    use arrow::array::RecordBatch;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    pub fn read_parquet_file(path: &Path) -> Result<Vec<RecordBatch>> {
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let reader = builder.build()?;
        let mut batches = Vec::new();
        for batch in reader {
            batches.push(batch?);
        }
        Ok(batches)
    }

    pub fn total_rows(batches: &[RecordBatch]) -> usize {
        batches.iter().map(|b| b.num_rows()).sum()
    }
}
