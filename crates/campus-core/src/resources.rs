use crate::error::ResourceError;
use crate::types::io::{CreateCourseInput, CreateItemInput, UpdateCourseInput, UpdateItemInput};
use crate::types::{CourseId, ItemId, ResourceCourse, ResourceItem};

pub trait ResourceRepository {
    fn create_course(&self, input: CreateCourseInput) -> Result<ResourceCourse, ResourceError>;
    /// Newest first.
    fn list_courses(&self) -> Result<Vec<ResourceCourse>, ResourceError>;
    fn get_course(&self, id: &CourseId) -> Result<Option<ResourceCourse>, ResourceError>;
    fn update_course(
        &self,
        id: &CourseId,
        input: UpdateCourseInput,
    ) -> Result<ResourceCourse, ResourceError>;
    /// Also removes every item belonging to the course.
    fn delete_course(&self, id: &CourseId) -> Result<(), ResourceError>;

    fn create_item(
        &self,
        course_id: &CourseId,
        input: CreateItemInput,
    ) -> Result<ResourceItem, ResourceError>;
    /// Ordered by `order`, then newest.
    fn list_items(&self, course_id: &CourseId) -> Result<Vec<ResourceItem>, ResourceError>;
    fn update_item(
        &self,
        id: &ItemId,
        input: UpdateItemInput,
    ) -> Result<ResourceItem, ResourceError>;
    fn delete_item(&self, id: &ItemId) -> Result<(), ResourceError>;
}
