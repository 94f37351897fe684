//! Output data: canonical records, dataset containers, JSON persistence and the
//! visa merge that runs over already written datasets.

pub mod dataset;
pub mod record;
pub mod visa;

pub use dataset::{
    read_json_value, write_json, CalendarDump, CalendarMetadata, DatasetError, DumpMetadata,
    FederationCalendar, NormalizedDump, RawDump,
};
pub use record::{
    CanonicalMarathonRecord, Coordinates, DerivedFlags, FederationEvent, KoreaMarathonRecord,
    RegistrationStatus,
};
pub use visa::{
    merge_visa, merge_visa_file, DatasetShape, MergeReport, VisaAllowance, VisaEntry, VisaError,
    VisaTable,
};
