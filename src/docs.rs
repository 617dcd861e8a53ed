use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::controller::CreatedAccountResponse;
use crate::modules::admin::model::{CreateAccountDto, ManageEnrollmentDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use crate::modules::complaints::controller::DeleteConfirmation;
use crate::modules::complaints::model::{
    Complaint, ComplaintListResponse, ComplaintResponse, ComplaintStatus, ComplaintType,
    CreateComplaintDto, DeletedComplaintResponse, PaginatedComplaints, PaginationMeta,
    StudentDetails, UpdateComplaintDto,
};
use crate::modules::courses::model::{
    Course, CourseActionResponse, CourseContent, CourseModule, CourseProgress,
    CourseWithEnrollment, CourseWithInstructor, CreateCourseDto, EnrollmentDto,
    PlayCourseResponse, UpdateProgressDto,
};
use crate::modules::instructors::model::{
    ComplaintStatistics, ComplaintStatisticsResponse, InstructorCourseSummary, InstructorDashboard,
    InstructorDashboardResponse, InstructorProfileResponse,
};
use crate::modules::portfolios::model::{
    CreatePortfolioDto, Education, Experience, Portfolio, PortfolioResponse, ProfileResponse,
    Project, UpdatePortfolioDto,
};
use crate::modules::students::model::{
    DashboardComplaint, DashboardCourse, PasswordChangeResponse, StudentDashboard,
    StudentDashboardResponse, StudentProfileResponse, StudentStatistics,
    StudentStatisticsResponse, UpdateProfileResponse,
};
use crate::modules::users::model::{
    ChangePasswordDto, UpdateProfileDto, User, UserRole, UserSummary,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::protected_admin,
        crate::modules::auth::controller::protected_student,
        crate::modules::auth::controller::protected_instructor,
        crate::modules::courses::controller::list_courses,
        crate::modules::courses::controller::list_enrolled_courses,
        crate::modules::courses::controller::enroll_in_course,
        crate::modules::courses::controller::withdraw_from_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::list_instructor_courses,
        crate::modules::courses::controller::play_course,
        crate::modules::courses::controller::update_progress,
        crate::modules::complaints::controller::create_complaint,
        crate::modules::complaints::controller::list_complaints,
        crate::modules::complaints::controller::list_student_complaints,
        crate::modules::complaints::controller::update_complaint,
        crate::modules::complaints::controller::delete_complaint,
        crate::modules::complaints::controller::delete_student_complaint,
        crate::modules::students::controller::get_profile,
        crate::modules::students::controller::update_profile,
        crate::modules::students::controller::change_password,
        crate::modules::students::controller::dashboard,
        crate::modules::students::controller::statistics,
        crate::modules::instructors::controller::get_profile,
        crate::modules::instructors::controller::dashboard,
        crate::modules::instructors::controller::statistics,
        crate::modules::instructors::controller::change_password,
        crate::modules::admin::controller::create_admin,
        crate::modules::admin::controller::list_students,
        crate::modules::admin::controller::create_student,
        crate::modules::admin::controller::get_student_profile,
        crate::modules::admin::controller::delete_student,
        crate::modules::admin::controller::list_instructors,
        crate::modules::admin::controller::create_instructor,
        crate::modules::admin::controller::delete_instructor,
        crate::modules::admin::controller::list_courses,
        crate::modules::admin::controller::assign_course,
        crate::modules::admin::controller::remove_course,
        crate::modules::admin::controller::list_portfolios,
        crate::modules::portfolios::controller::list_portfolios,
        crate::modules::portfolios::controller::get_portfolio_by_username,
        crate::modules::portfolios::controller::create_portfolio,
        crate::modules::portfolios::controller::update_portfolio,
        crate::modules::portfolios::controller::toggle_publish,
        crate::modules::portfolios::controller::delete_portfolio,
        crate::modules::portfolios::controller::get_profile,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserSummary,
            UpdateProfileDto,
            ChangePasswordDto,
            LoginRequest,
            RegisterRequest,
            AuthResponse,
            MessageResponse,
            ErrorResponse,
            Course,
            CourseModule,
            CourseWithEnrollment,
            CourseWithInstructor,
            CourseContent,
            CourseProgress,
            CreateCourseDto,
            EnrollmentDto,
            UpdateProgressDto,
            PlayCourseResponse,
            CourseActionResponse,
            Complaint,
            ComplaintType,
            ComplaintStatus,
            StudentDetails,
            CreateComplaintDto,
            UpdateComplaintDto,
            ComplaintResponse,
            ComplaintListResponse,
            PaginatedComplaints,
            PaginationMeta,
            DeletedComplaintResponse,
            DeleteConfirmation,
            StudentProfileResponse,
            UpdateProfileResponse,
            PasswordChangeResponse,
            StudentDashboard,
            StudentDashboardResponse,
            DashboardCourse,
            DashboardComplaint,
            StudentStatistics,
            StudentStatisticsResponse,
            InstructorProfileResponse,
            InstructorDashboard,
            InstructorDashboardResponse,
            InstructorCourseSummary,
            ComplaintStatistics,
            ComplaintStatisticsResponse,
            CreateAccountDto,
            ManageEnrollmentDto,
            CreatedAccountResponse,
            Portfolio,
            Experience,
            Project,
            Education,
            CreatePortfolioDto,
            UpdatePortfolioDto,
            PortfolioResponse,
            ProfileResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and role probe endpoints"),
        (name = "Courses", description = "Course catalog, enrollment, and playback"),
        (name = "Complaints", description = "Student complaints and their triage"),
        (name = "Students", description = "Student profile, dashboard, and statistics"),
        (name = "Instructors", description = "Instructor profile, dashboard, and statistics"),
        (name = "Admin", description = "Account and enrollment administration"),
        (name = "Portfolios", description = "Public portfolios and their management")
    ),
    info(
        title = "Learnbyte API",
        version = "0.1.0",
        description = "A learning-management REST API built with Rust, Axum, and PostgreSQL featuring JWT-based authentication with role and ownership access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
