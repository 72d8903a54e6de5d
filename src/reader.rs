use crate::error::ServiceError;
use crate::request::Request;
use std::io::Read;

pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<Request, ServiceError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ServiceError::from))
    }
}
