use edu_core::entities::{
    Course, CourseDetail, CourseReportRow, EnrolledStudent, Enrollment, Progress, Session,
    StudentGrade, TeachingAssignment, UserProfile,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `edubot schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_of(args.type_name), flags.format)
}

fn schema_of(type_name: SchemaType) -> Schema {
    match type_name {
        SchemaType::Session => schema_for!(Session),
        SchemaType::User => schema_for!(UserProfile),
        SchemaType::Course => schema_for!(Course),
        SchemaType::CourseDetail => schema_for!(CourseDetail),
        SchemaType::Assignment => schema_for!(TeachingAssignment),
        SchemaType::Enrollment => schema_for!(Enrollment),
        SchemaType::Progress => schema_for!(Progress),
        SchemaType::ReportRow => schema_for!(CourseReportRow),
        SchemaType::Student => schema_for!(EnrolledStudent),
        SchemaType::Grade => schema_for!(StudentGrade),
    }
}
